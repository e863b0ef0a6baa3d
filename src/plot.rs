use super::VERSION;
use crate::chart::{ChartStyle, Curve, Figure, Reference, SeriesColor};
use crate::ReportError;
use clap::{value_t, App, Arg};
use std::path::PathBuf;

/// colors given in turn to curves without one, red is left to the reference
const CYCLE: [SeriesColor; 6] = [
    SeriesColor::Blue,
    SeriesColor::Green,
    SeriesColor::Cyan,
    SeriesColor::Magenta,
    SeriesColor::Black,
    SeriesColor::Yellow,
];

/// Parses `path:column:label[:color]`, `nth` picks the default color.
/// Fields are taken from the right so the path may hold `:` itself.
pub fn parse_curve(s: &str, nth: usize) -> Result<Curve, ReportError> {
    let invalid = || ReportError::InvalidCurve(s.to_string());
    let is_column = |f: &str| f.trim().parse::<usize>().is_ok();
    let three: Vec<&str> = s.rsplitn(3, ':').collect();
    let four: Vec<&str> = s.rsplitn(4, ':').collect();
    let (path, column, label, color) = match (three.as_slice(), four.as_slice()) {
        ([label, column, path], _) if is_column(*column) => (*path, *column, *label, None),
        (_, [color, label, column, path]) if is_column(*column) => {
            (*path, *column, *label, Some(color.parse::<SeriesColor>()?))
        }
        _ => return Err(invalid()),
    };
    if path.is_empty() || label.is_empty() {
        return Err(invalid());
    }
    let column: usize = column.trim().parse().map_err(|_| invalid())?;
    let color = color.unwrap_or(CYCLE[nth % CYCLE.len()]);
    Ok(Curve::new(path, column, label, color))
}

/// An ad-hoc chart and where to write it
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub figure: Figure,
    pub svgout: PathBuf,
    pub style: ChartStyle,
}

fn app<'a, 'b>() -> App<'a, 'b> {
    let arg_curve = Arg::with_name("curve")
        .help("curve as path:column:label[:color], can be repeated")
        .long_help(
            "curve as path:column:label[:color], can be repeated; \
            column 0 of the file is the matrix size, column is the measurement to plot; \
            colors: blue, green, red, cyan, black, magenta, yellow",
        )
        .short("c")
        .long("curve")
        .takes_value(true)
        .multiple(true)
        .number_of_values(1)
        .required(true);
    let arg_ylabel = Arg::with_name("ylabel")
        .help("label of the y axis")
        .short("y")
        .long("ylabel")
        .takes_value(true)
        .default_value("Time");
    let arg_reference = Arg::with_name("reference")
        .help("add the dashed 10^exponent n^3 reference curve, in the given color")
        .short("r")
        .long("reference")
        .takes_value(true)
        .min_values(0)
        .max_values(1);
    let arg_exponent = Arg::with_name("exponent")
        .help("power of ten scaling the n^3 reference curve")
        .short("e")
        .long("exponent")
        .takes_value(true)
        .allow_hyphen_values(true)
        .default_value("-9");
    let arg_svgout = Arg::with_name("output_svgfile")
        .help("name of the output svg file, defaults to the first curve file with svg extension")
        .short("o")
        .long("svgfile")
        .takes_value(true);
    let arg_font_size = Arg::with_name("font_size")
        .help("font size of labels and legend")
        .long("font-size")
        .takes_value(true)
        .default_value("22");
    App::new("gem_plot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot benchmark result files against the matrix size")
        .arg(arg_curve)
        .arg(arg_ylabel)
        .arg(arg_reference)
        .arg(arg_exponent)
        .arg(arg_svgout)
        .arg(arg_font_size)
}

/// Takes the CLI arguments of an ad-hoc plot, exits on invalid ones.
pub fn parse_cli() -> PlotConfig {
    parse_cli_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
}

pub fn parse_cli_from<I, T>(args: I) -> Result<PlotConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli_args = app().get_matches_from_safe(args)?;
    let value_error = |e: ReportError| {
        clap::Error::with_description(&e.to_string(), clap::ErrorKind::InvalidValue)
    };

    let mut figure = Figure::new("plot", cli_args.value_of("ylabel").unwrap_or("Time"));
    for (nth, c) in cli_args.values_of("curve").into_iter().flatten().enumerate() {
        figure = figure.curve(parse_curve(c, nth).map_err(value_error)?);
    }
    if cli_args.is_present("reference") {
        let color = match cli_args.value_of("reference") {
            Some(c) => c.parse::<SeriesColor>().map_err(value_error)?,
            None => SeriesColor::Red,
        };
        figure = figure.reference(Reference {
            exponent: value_t!(cli_args, "exponent", i32)?,
            color,
        });
    }

    let svgout = match cli_args.value_of("output_svgfile") {
        Some(p) => PathBuf::from(p),
        None => {
            let mut svgout = figure
                .curves
                .first()
                .map(|c| c.path.clone())
                .unwrap_or_else(|| PathBuf::from("plot"));
            svgout.set_extension("svg");
            svgout
        }
    };
    if let Some(stem) = svgout.file_stem() {
        figure.name = stem.to_string_lossy().into_owned();
    }

    let style = ChartStyle {
        font_size: value_t!(cli_args, "font_size", u32)?,
        ..ChartStyle::default()
    };
    Ok(PlotConfig {
        figure,
        svgout,
        style,
    })
}
