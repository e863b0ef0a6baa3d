use gem_report::plot::parse_cli;
use tracing::{error, info};

fn main() {
    gem_report::init_logging();
    let config = parse_cli();
    info!(
        "plot {} curve(s) to {}",
        config.figure.curves.len(),
        config.svgout.display()
    );
    if let Err(e) = config.figure.render(&config.svgout, &config.style) {
        error!("{}", e);
        std::process::exit(1);
    }
}
