use gem_report::report::{parse_cli, render_report};
use tracing::{error, info};

fn main() {
    gem_report::init_logging();
    let config = parse_cli();
    info!(
        "read data from {} and plot to {}",
        config.data_dir.display(),
        config.image_dir.display()
    );
    match render_report(&config) {
        Ok(written) => info!("wrote {} figure(s)", written.len()),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
