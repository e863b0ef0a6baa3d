use crate::error::drawing;
use crate::realiterator::Linspace;
use crate::{corner_span, min_and_max, n_cubed, ReportError, Series};
use crate::{EXPONENT, REFERENCE_SPACING, X_LABEL};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

type Points = Vec<(f64, f64)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Blue,
    Green,
    Red,
    Cyan,
    Black,
    Magenta,
    Yellow,
}

impl SeriesColor {
    pub fn rgb(self) -> RGBColor {
        match self {
            SeriesColor::Blue => BLUE,
            SeriesColor::Green => RGBColor(0, 128, 0),
            SeriesColor::Red => RED,
            SeriesColor::Cyan => CYAN,
            SeriesColor::Black => BLACK,
            SeriesColor::Magenta => MAGENTA,
            SeriesColor::Yellow => YELLOW,
        }
    }
}

impl FromStr for SeriesColor {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blue" => Ok(SeriesColor::Blue),
            "green" => Ok(SeriesColor::Green),
            "red" => Ok(SeriesColor::Red),
            "cyan" => Ok(SeriesColor::Cyan),
            "black" => Ok(SeriesColor::Black),
            "magenta" => Ok(SeriesColor::Magenta),
            "yellow" => Ok(SeriesColor::Yellow),
            _ => Err(ReportError::UnknownColor(s.to_string())),
        }
    }
}

/// one column of one benchmark file, as it appears on the chart
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub path: PathBuf,
    pub column: usize,
    pub label: String,
    pub color: SeriesColor,
}

impl Curve {
    pub fn new(path: impl Into<PathBuf>, column: usize, label: &str, color: SeriesColor) -> Self {
        Curve {
            path: path.into(),
            column,
            label: label.to_string(),
            color,
        }
    }
}

/// dashed 10^exponent * n^3 curve over the span of the measured curves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reference {
    pub exponent: i32,
    pub color: SeriesColor,
}

impl Reference {
    pub fn new(color: SeriesColor) -> Self {
        Reference {
            exponent: EXPONENT,
            color,
        }
    }

    pub fn label(&self) -> String {
        format!("10{} n³", superscript(self.exponent))
    }

    /// samples every REFERENCE_SPACING between start and stop, ends included
    pub fn points(&self, start: u64, stop: u64) -> Points {
        Linspace::with_spacing(start as f64, stop as f64, REFERENCE_SPACING)
            .map(|n| (n, n_cubed(n, self.exponent)))
            .filter(|p| p.1.is_finite())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub font_size: u32,
    pub marker_size: u32,
    pub margin: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle {
            width: 1000,
            height: 1000,
            font_size: 22,
            marker_size: 4,
            margin: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// file stem of the exported image
    pub name: String,
    pub y_label: String,
    pub curves: Vec<Curve>,
    pub reference: Option<Reference>,
}

/// Everything a figure needs once the files are read, so that a bad file
/// fails before any image is created.
#[derive(Debug, Clone)]
pub struct Layers<'a> {
    pub curves: Vec<(&'a Curve, Points)>,
    pub reference: Option<(Reference, Points)>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl Figure {
    pub fn new(name: &str, y_label: &str) -> Self {
        Figure {
            name: name.to_string(),
            y_label: y_label.to_string(),
            curves: Vec::new(),
            reference: None,
        }
    }

    pub fn curve(mut self, curve: Curve) -> Self {
        self.curves.push(curve);
        self
    }

    pub fn reference(mut self, reference: Reference) -> Self {
        self.reference = Some(reference);
        self
    }

    /// loads the curves, spans the reference and sizes the axes
    pub fn layers(&self) -> Result<Layers<'_>, ReportError> {
        let mut curves = Vec::with_capacity(self.curves.len());
        let mut spans = Vec::with_capacity(self.curves.len());
        for curve in &self.curves {
            let series = Series::from_file(&curve.path, curve.column)?;
            let points = series.points();
            if points.is_empty() {
                return Err(ReportError::NoFiniteValues {
                    path: curve.path.clone(),
                    column: curve.column,
                });
            }
            if points.len() < series.len() {
                warn!(
                    path = %curve.path.display(),
                    column = curve.column,
                    skipped = series.len() - points.len(),
                    "non-finite measurements left out"
                );
            }
            spans.extend(series.span());
            curves.push((curve, points));
        }

        let reference = match self.reference {
            Some(r) => {
                let (start, stop) = corner_span(spans)?;
                let points = r.points(start, stop);
                if start > stop {
                    warn!(
                        figure = %self.name,
                        start,
                        stop,
                        "matrix sizes decrease, no reference curve"
                    );
                } else if points.len() < 2 {
                    warn!(
                        figure = %self.name,
                        start,
                        stop,
                        "span too short for the reference curve"
                    );
                }
                Some((r, points))
            }
            None => None,
        };

        let all = || {
            curves
                .iter()
                .flat_map(|(_, p)| p.iter())
                .chain(reference.iter().flat_map(|(_, p)| p.iter()))
        };
        let (xmin, xmax) = min_and_max(all().map(|p| p.0)).ok_or(ReportError::NoSpan)?;
        let (ymin, ymax) = min_and_max(all().map(|p| p.1)).ok_or(ReportError::NoSpan)?;

        Ok(Layers {
            x_range: padded(xmin, xmax, 20.),
            y_range: padded(ymin, ymax, 10.),
            curves,
            reference,
        })
    }

    /// renders to `image_dir/<name>.svg`, creating the directory if needed
    pub fn render_to_dir(&self, image_dir: &Path, style: &ChartStyle) -> Result<PathBuf, ReportError> {
        std::fs::create_dir_all(image_dir).map_err(|e| ReportError::io(image_dir, e))?;
        let mut fout = image_dir.join(&self.name);
        fout.set_extension("svg");
        self.render(&fout, style)?;
        Ok(fout)
    }

    /// plots the curves and the reference to the svg file `fout`
    pub fn render(&self, fout: &Path, style: &ChartStyle) -> Result<(), ReportError> {
        let layers = self.layers()?;
        let (xmin, xmax) = layers.x_range;
        let (ymin, ymax) = layers.y_range;
        let marker = style.marker_size;

        let root = SVGBackend::new(fout, (style.width, style.height)).into_drawing_area();
        let mut chart = ChartBuilder::on(&root)
            .margin(style.margin)
            .x_label_area_size(style.font_size * 3)
            .y_label_area_size(style.font_size * 5)
            .build_cartesian_2d(xmin..xmax, ymin..ymax)
            .map_err(drawing)?;
        chart
            .configure_mesh()
            .light_line_style(&TRANSPARENT)
            .bold_line_style(RGBColor(150, 150, 150).stroke_width(1))
            .set_all_tick_mark_size(2)
            .label_style(("sans-serif", style.font_size))
            .axis_desc_style(("sans-serif", style.font_size))
            .x_desc(X_LABEL)
            .y_desc(self.y_label.as_str())
            .x_label_formatter(&|x: &f64| format!("{:.0}", x))
            .y_label_formatter(&|y: &f64| axis_label(*y))
            .draw()
            .map_err(drawing)?;

        for (curve, points) in layers.curves.iter() {
            let color = curve.color.rgb();
            chart
                .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
                .map_err(drawing)?
                .label(curve.label.as_str())
                .legend(move |(x, y)| {
                    EmptyElement::at((x, y))
                        + PathElement::new(vec![(0, 0), (20, 0)], color.stroke_width(2))
                        + Circle::new((10, 0), marker, color.filled())
                });
            chart
                .draw_series(points.iter().map(|&p| Circle::new(p, marker, color.filled())))
                .map_err(drawing)?;
        }

        if let Some((reference, points)) = layers.reference.as_ref().filter(|(_, p)| !p.is_empty()) {
            let color = reference.color.rgb();
            if points.len() > 1 {
                chart
                    .draw_series(DashedLineSeries::new(
                        points.iter().copied(),
                        10,
                        6,
                        color.stroke_width(2),
                    ))
                    .map_err(drawing)?;
            }
            chart
                .draw_series(points.iter().map(|&p| Circle::new(p, marker, color.filled())))
                .map_err(drawing)?
                .label(reference.label())
                .legend(move |(x, y)| {
                    EmptyElement::at((x, y))
                        + PathElement::new(vec![(0, 0), (6, 0)], color.stroke_width(2))
                        + PathElement::new(vec![(14, 0), (20, 0)], color.stroke_width(2))
                        + Circle::new((10, 0), marker, color.filled())
                });
        }

        chart
            .configure_series_labels()
            .label_font(("sans-serif", style.font_size))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()
            .map_err(drawing)?;
        root.present().map_err(drawing)?;
        info!(figure = %self.name, file = %fout.display(), "figure written");
        Ok(())
    }
}

/// widens [min, max] by span/fraction on each side, a flat range gets a unit pad
fn padded(min: f64, max: f64, fraction: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span > 0. {
        span / fraction
    } else if min != 0. {
        min.abs() / fraction
    } else {
        1.
    };
    (min - pad, max + pad)
}

/// residues and errors live many decades below one, use exponents there
fn axis_label(v: f64) -> String {
    let a = v.abs();
    if a != 0. && !(1e-2..1e4).contains(&a) {
        format!("{:.1e}", v)
    } else {
        format!("{}", (v * 1000.).round() / 1000.)
    }
}

fn superscript(v: i32) -> String {
    v.to_string()
        .chars()
        .map(|c| match c {
            '-' => '⁻',
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            c => c,
        })
        .collect()
}
