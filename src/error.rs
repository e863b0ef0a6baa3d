use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}:{line}: missing column {column}", .path.display())]
    MissingColumn {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("{}:{line}: invalid value {value:?} in column {column}", .path.display())]
    InvalidValue {
        path: PathBuf,
        line: usize,
        column: usize,
        value: String,
    },

    #[error("{} contains no data rows", .0.display())]
    Empty(PathBuf),

    #[error("{} has no finite values in column {column}", .path.display())]
    NoFiniteValues { path: PathBuf, column: usize },

    #[error("no lowest or biggest stop, there are no series to span")]
    NoSpan,

    #[error("unknown figure {0:?}")]
    UnknownFigure(String),

    #[error("unknown color {0:?}")]
    UnknownColor(String),

    #[error("invalid curve {0:?}, expected path:column:label[:color]")]
    InvalidCurve(String),

    #[error("drawing failed: {0}")]
    Drawing(String),
}

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Plotters errors are generic over the backend, only their message is kept.
pub(crate) fn drawing<E: std::fmt::Display>(e: E) -> ReportError {
    ReportError::Drawing(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_location() {
        let e = ReportError::InvalidValue {
            path: PathBuf::from("data/hilbert-parallel"),
            line: 7,
            column: 3,
            value: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "data/hilbert-parallel:7: invalid value \"abc\" in column 3"
        );
        let e = ReportError::Empty(PathBuf::from("empty"));
        assert_eq!(e.to_string(), "empty contains no data rows");
    }
}
