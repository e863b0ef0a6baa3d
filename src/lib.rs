use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
pub mod chart;
pub mod error;
pub mod plot;
pub mod realiterator;
pub mod report;

pub use error::ReportError;

pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

/// column separator of the benchmark result files, e.g. `500, 1.2e-10, 3.4e-2, 0.25`
pub const DELIMITER: &str = ", ";

pub const X_LABEL: &str = "Matrix size";

/// default power of ten scaling the n^3 reference curve
pub const EXPONENT: i32 = -9;

/// distance in matrix size between the points of the reference curve
pub const REFERENCE_SPACING: f64 = 50.;

/// One measured column of a benchmark file against the matrix size
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub x: Vec<u64>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn new(capacity: usize) -> Series {
        Series {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    /// Reads a benchmark file, taking the matrix size from the first column
    /// and the measurement from column `y_index`.
    /// Blank lines are skipped, any other malformed line is an error.
    pub fn from_file(path: &Path, y_index: usize) -> Result<Series, ReportError> {
        let file = File::open(path).map_err(|e| ReportError::io(path, e))?;
        let series = Series::from_reader(BufReader::new(file), path, y_index)?;
        debug!(
            path = %path.display(),
            column = y_index,
            rows = series.len(),
            "loaded series"
        );
        Ok(series)
    }

    /// Same as `from_file`, `path` is only used to locate errors.
    pub fn from_reader<R: BufRead>(
        buf: R,
        path: &Path,
        y_index: usize,
    ) -> Result<Series, ReportError> {
        let mut series = Series::new(64);
        for (i, l) in buf.lines().enumerate() {
            let line = i + 1;
            let l = l.map_err(|e| ReportError::io(path, e))?;
            if l.trim().is_empty() {
                debug!(path = %path.display(), line, "skipping blank line");
                continue;
            }
            let fields: Vec<&str> = l.split(DELIMITER).map(str::trim).collect();
            let field = |column: usize| {
                fields
                    .get(column)
                    .copied()
                    .ok_or_else(|| ReportError::MissingColumn {
                        path: path.to_path_buf(),
                        line,
                        column,
                    })
            };
            let invalid = |column: usize, value: &str| ReportError::InvalidValue {
                path: path.to_path_buf(),
                line,
                column,
                value: value.to_string(),
            };
            let x_str = field(0)?;
            let y_str = field(y_index)?;
            let x: u64 = x_str.parse().map_err(|_| invalid(0, x_str))?;
            let y: f64 = y_str.parse().map_err(|_| invalid(y_index, y_str))?;
            series.x.push(x);
            series.y.push(y);
        }
        if series.is_empty() {
            return Err(ReportError::Empty(path.to_path_buf()));
        }
        Ok(series)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// first and last matrix size, in file order
    pub fn span(&self) -> Option<(u64, u64)> {
        Some((*self.x.first()?, *self.x.last()?))
    }

    /// the (x, y) pairs in chart coordinates; NaN and infinite measurements
    /// cannot be placed on an axis and are left out
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x
            .iter()
            .zip(self.y.iter())
            .filter(|(_, y)| y.is_finite())
            .map(|(&x, &y)| (x as f64, y))
            .collect()
    }
}

/// lowest start and biggest stop over all the spans
pub fn corner_span<I>(spans: I) -> Result<(u64, u64), ReportError>
where
    I: IntoIterator<Item = (u64, u64)>,
{
    spans
        .into_iter()
        .fold(None, |acc, (start, stop)| match acc {
            None => Some((start, stop)),
            Some((lower, bigger)) => Some((lower.min(start), bigger.max(stop))),
        })
        .ok_or(ReportError::NoSpan)
}

/// reference complexity curve, 10^exponent * n^3
pub fn n_cubed(n: f64, exponent: i32) -> f64 {
    10f64.powi(exponent) * n.powi(3)
}

/// minimum and maximum of the finite values; None if nothing is left
pub fn min_and_max<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

/// fmt subscriber filtered by RUST_LOG, `info` when unset
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// `data_dir/name`, the benchmark files have no extension
pub fn data_path(data_dir: &Path, name: &str) -> PathBuf {
    data_dir.join(name)
}
