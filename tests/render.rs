use gem_report::chart::{ChartStyle, Curve, Figure, Reference, SeriesColor};
use gem_report::report::{render_report, ReportConfig, FIGURES};
use gem_report::ReportError;
use std::fs;
use std::path::Path;

fn write_data(dir: &Path) {
    let mut seq = String::new();
    let mut par = String::new();
    for n in (100..=1000).step_by(100) {
        let t = n as f64;
        // size, residue, error, time
        seq.push_str(&format!("{}, {:e}, {:e}, {}\n", n, 1e-17 * t, 1e-5 * t, 1e-9 * t * t * t));
        par.push_str(&format!("{}, {:e}, {:e}, {}\n", n, 2e-17 * t, 3e-5 * t, 2.5e-10 * t * t * t));
    }
    fs::write(dir.join("hilbert-sequential"), seq).unwrap();
    fs::write(dir.join("hilbert-parallel"), par).unwrap();
    fs::write(dir.join("determinant-definition"), "2, 0.00001\n4, 0.0002\n6, 0.01\n8, 0.9\n").unwrap();
    fs::write(dir.join("determinant-elimination"), "100, 0.001\n200, 0.008\n300, 0.027\n").unwrap();
    fs::write(dir.join("determinant-parallel"), "100, 0.0005\n200, 0.003\n300, 0.01\n").unwrap();
}

/// number of stroked or filled shapes in `color`, e.g. `#ff0000`
fn count_shapes(svg: &str, color: &str) -> (usize, usize) {
    let tags: Vec<String> = svg.split('<').map(|t| t.to_lowercase()).collect();
    let strokes = tags
        .iter()
        .filter(|t| (t.starts_with("polyline") || t.starts_with("line ")) && t.contains(color))
        .count();
    let circles = tags
        .iter()
        .filter(|t| t.starts_with("circle") && t.contains(color))
        .count();
    (strokes, circles)
}

const RED: &str = "#ff0000";

fn config(root: &Path) -> ReportConfig {
    ReportConfig {
        data_dir: root.join("data"),
        image_dir: root.join("images"),
        ..ReportConfig::default()
    }
}

#[test]
fn renders_the_three_standard_figures() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("data")).unwrap();
    write_data(&root.path().join("data"));
    let config = config(root.path());

    let written = render_report(&config).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    let expected: Vec<String> = FIGURES.iter().map(|f| format!("{}.svg", f)).collect();
    assert_eq!(names, expected);

    let complexity = fs::read_to_string(config.image_dir.join("system_complexity.svg")).unwrap();
    assert!(complexity.contains("<svg"));
    assert!(complexity.contains("Matrix size"));
    assert!(complexity.contains("Sequential"));
    assert!(complexity.contains("Parallel"));
    assert!(complexity.contains("10⁻⁹ n³"));
    // 100..1000 gives 18 reference points joined by many short dashes
    let (strokes, circles) = count_shapes(&complexity, RED);
    assert!(strokes > 10, "only {} red strokes", strokes);
    assert!(circles >= 18, "only {} red markers", circles);

    let stability = fs::read_to_string(config.image_dir.join("system_stability.svg")).unwrap();
    assert!(stability.contains("Residue/error"));
    assert!(stability.contains("Error"));
    assert!(!stability.contains("n³"));
    assert_eq!(count_shapes(&stability, RED), (0, 0));

    let determinant =
        fs::read_to_string(config.image_dir.join("determinant_complexity.svg")).unwrap();
    for label in &["From definition", "Sequential GEM", "Parallel GEM"] {
        assert!(determinant.contains(label), "missing {}", label);
    }
}

#[test]
fn renders_a_selection_only() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("data")).unwrap();
    write_data(&root.path().join("data"));
    let mut config = config(root.path());
    config.figures = vec!["system_stability".to_string()];

    let written = render_report(&config).unwrap();
    assert_eq!(written, vec![config.image_dir.join("system_stability.svg")]);
    assert!(!config.image_dir.join("system_complexity.svg").exists());
}

#[test]
fn missing_data_file_names_the_file() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("data")).unwrap();
    let mut config = config(root.path());
    config.figures = vec!["determinant_complexity".to_string()];

    let e = render_report(&config).unwrap_err();
    assert!(matches!(e, ReportError::Io { .. }));
    assert!(e.to_string().contains("determinant-definition"));
}

#[test]
fn malformed_row_is_located() {
    let root = tempfile::tempdir().unwrap();
    let data = root.path().join("times");
    fs::write(&data, "100, 0.1\n200, 0.2\n300; 0.3\n").unwrap();
    let figure = Figure::new("times", "Time").curve(Curve::new(&data, 1, "t", SeriesColor::Blue));

    let e = figure
        .render(&root.path().join("times.svg"), &ChartStyle::default())
        .unwrap_err();
    match e {
        ReportError::MissingColumn { line, column, .. } => {
            assert_eq!(line, 3);
            assert_eq!(column, 1);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn short_span_still_renders() {
    // 10..40 leaves no room for a reference point
    let root = tempfile::tempdir().unwrap();
    let data = root.path().join("small");
    fs::write(&data, "10, 0.1\n40, 0.2\n").unwrap();
    let figure = Figure::new("small", "Time")
        .curve(Curve::new(&data, 1, "small", SeriesColor::Green))
        .reference(Reference::new(SeriesColor::Red));

    let out = figure
        .render_to_dir(&root.path().join("out"), &ChartStyle::default())
        .unwrap();
    assert_eq!(out, root.path().join("out").join("small.svg"));
    let svg = fs::read_to_string(out).unwrap();
    assert!(svg.contains("small"));
    assert!(!svg.contains("n³"));
    assert_eq!(count_shapes(&svg, RED), (0, 0));
}

#[test]
fn single_reference_point_is_a_marker_only() {
    // (170 - 100) / 50 leaves the start point alone
    let root = tempfile::tempdir().unwrap();
    let data = root.path().join("one");
    fs::write(&data, "100, 0.001\n170, 0.005\n").unwrap();
    let figure = Figure::new("one", "Time")
        .curve(Curve::new(&data, 1, "one", SeriesColor::Blue))
        .reference(Reference::new(SeriesColor::Red));

    let layers = figure.layers().unwrap();
    let reference = &layers.reference.as_ref().unwrap().1;
    assert_eq!(reference.len(), 1);
    assert_eq!(reference[0].0, 100.);
    assert!((reference[0].1 - 0.001).abs() < 1e-12);

    let out = figure
        .render_to_dir(&root.path().join("out"), &ChartStyle::default())
        .unwrap();
    let svg = fs::read_to_string(out).unwrap();
    assert!(svg.contains("10⁻⁹ n³"));
    // the chart marker and the legend marker, no dashed line beyond the legend sample
    let (strokes, circles) = count_shapes(&svg, RED);
    assert_eq!(circles, 2);
    assert!(strokes <= 2, "{} red strokes", strokes);
}
