use super::VERSION;
use crate::chart::{ChartStyle, Curve, Figure, Reference, SeriesColor};
use crate::{data_path, ReportError, EXPONENT};
use clap::{value_t, App, Arg};
use std::path::{Path, PathBuf};
use tracing::info;

pub const SYSTEM_COMPLEXITY: &str = "system_complexity";
pub const SYSTEM_STABILITY: &str = "system_stability";
pub const DETERMINANT_COMPLEXITY: &str = "determinant_complexity";

/// in rendering order
pub const FIGURES: [&str; 3] = [SYSTEM_COMPLEXITY, SYSTEM_STABILITY, DETERMINANT_COMPLEXITY];

/// The benchmark files written by the tester, all rows start with the matrix size.
/// hilbert-*: size, residue, error, time; determinant-*: size, time.
pub const HILBERT_SEQUENTIAL: &str = "hilbert-sequential";
pub const HILBERT_PARALLEL: &str = "hilbert-parallel";
pub const DETERMINANT_DEFINITION: &str = "determinant-definition";
pub const DETERMINANT_ELIMINATION: &str = "determinant-elimination";
pub const DETERMINANT_PARALLEL: &str = "determinant-parallel";

/// Settings of a report run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub data_dir: PathBuf,
    pub image_dir: PathBuf,
    /// empty means all of FIGURES
    pub figures: Vec<String>,
    pub exponent: i32,
    pub style: ChartStyle,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            data_dir: PathBuf::from("../data"),
            image_dir: PathBuf::from("../images"),
            figures: Vec::new(),
            exponent: EXPONENT,
            style: ChartStyle::default(),
        }
    }
}

/// builds one of the standard figures, reading the data files from `data_dir`
pub fn standard_figure(name: &str, data_dir: &Path, exponent: i32) -> Result<Figure, ReportError> {
    let file = |f: &str| data_path(data_dir, f);
    let figure = match name {
        SYSTEM_COMPLEXITY => Figure::new(name, "Time")
            .curve(Curve::new(file(HILBERT_SEQUENTIAL), 3, "Sequential", SeriesColor::Blue))
            .curve(Curve::new(file(HILBERT_PARALLEL), 3, "Parallel", SeriesColor::Green))
            .reference(Reference {
                exponent,
                color: SeriesColor::Red,
            }),
        SYSTEM_STABILITY => Figure::new(name, "Residue/error")
            .curve(Curve::new(file(HILBERT_PARALLEL), 1, "Residue", SeriesColor::Blue))
            .curve(Curve::new(file(HILBERT_PARALLEL), 2, "Error", SeriesColor::Green)),
        DETERMINANT_COMPLEXITY => Figure::new(name, "Time")
            .curve(Curve::new(
                file(DETERMINANT_DEFINITION),
                1,
                "From definition",
                SeriesColor::Green,
            ))
            .curve(Curve::new(
                file(DETERMINANT_ELIMINATION),
                1,
                "Sequential GEM",
                SeriesColor::Blue,
            ))
            .curve(Curve::new(
                file(DETERMINANT_PARALLEL),
                1,
                "Parallel GEM",
                SeriesColor::Cyan,
            )),
        _ => return Err(ReportError::UnknownFigure(name.to_string())),
    };
    Ok(figure)
}

/// Resolves the selected figures, in the order they were asked for.
/// Every name is checked before anything is drawn.
pub fn selected_figures(config: &ReportConfig) -> Result<Vec<Figure>, ReportError> {
    let names: Vec<&str> = if config.figures.is_empty() {
        FIGURES.to_vec()
    } else {
        config.figures.iter().map(String::as_str).collect()
    };
    names
        .into_iter()
        .map(|f| standard_figure(f, &config.data_dir, config.exponent))
        .collect()
}

/// renders the selected figures into the image directory, returns the written files
pub fn render_report(config: &ReportConfig) -> Result<Vec<PathBuf>, ReportError> {
    let figures = selected_figures(config)?;
    info!(
        data_dir = %config.data_dir.display(),
        image_dir = %config.image_dir.display(),
        figures = figures.len(),
        "rendering report"
    );
    figures
        .iter()
        .map(|f| f.render_to_dir(&config.image_dir, &config.style))
        .collect()
}

fn app<'a, 'b>() -> App<'a, 'b> {
    let arg_data_dir = Arg::with_name("data_dir")
        .help("directory with the benchmark result files")
        .short("d")
        .long("data-dir")
        .takes_value(true)
        .default_value("../data");
    let arg_image_dir = Arg::with_name("image_dir")
        .help("directory for the svg figures")
        .short("o")
        .long("image-dir")
        .takes_value(true)
        .default_value("../images");
    let arg_figure = Arg::with_name("figure")
        .help("figure to render, can be repeated; all figures when omitted")
        .short("f")
        .long("figure")
        .takes_value(true)
        .multiple(true)
        .number_of_values(1)
        .possible_values(&FIGURES);
    let arg_exponent = Arg::with_name("exponent")
        .help("power of ten scaling the n^3 reference curve")
        .short("e")
        .long("exponent")
        .takes_value(true)
        .allow_hyphen_values(true)
        .default_value("-9");
    let arg_font_size = Arg::with_name("font_size")
        .help("font size of labels and legend")
        .long("font-size")
        .takes_value(true)
        .default_value("22");
    let arg_width = Arg::with_name("width")
        .help("width of the figures in pixels")
        .long("width")
        .takes_value(true)
        .default_value("1000");
    let arg_height = Arg::with_name("height")
        .help("height of the figures in pixels")
        .long("height")
        .takes_value(true)
        .default_value("1000");
    App::new("gem_report")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot the stability and time complexity figures of the benchmark report")
        .arg(arg_data_dir)
        .arg(arg_image_dir)
        .arg(arg_figure)
        .arg(arg_exponent)
        .arg(arg_font_size)
        .arg(arg_width)
        .arg(arg_height)
}

/// Takes the CLI arguments that control the report, exits on invalid ones.
pub fn parse_cli() -> ReportConfig {
    parse_cli_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
}

pub fn parse_cli_from<I, T>(args: I) -> Result<ReportConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli_args = app().get_matches_from_safe(args)?;
    let figures = cli_args
        .values_of("figure")
        .map(|v| v.map(String::from).collect())
        .unwrap_or_default();
    let style = ChartStyle {
        width: value_t!(cli_args, "width", u32)?,
        height: value_t!(cli_args, "height", u32)?,
        font_size: value_t!(cli_args, "font_size", u32)?,
        ..ChartStyle::default()
    };
    Ok(ReportConfig {
        data_dir: PathBuf::from(cli_args.value_of("data_dir").unwrap_or("../data")),
        image_dir: PathBuf::from(cli_args.value_of("image_dir").unwrap_or("../images")),
        figures,
        exponent: value_t!(cli_args, "exponent", i32)?,
        style,
    })
}
