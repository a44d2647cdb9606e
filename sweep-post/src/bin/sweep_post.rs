//! aggregates a routing parameter sweep into heatmaps and contour plots and
//! draws the route of every trial. run with RUST_LOG=info for progress output.
use clap::Parser;
use sweep_post::app::SweepPostApp;

fn main() {
    env_logger::init();
    let args = SweepPostApp::parse();
    match args.run() {
        Ok(summary) => log::info!(
            "wrote {} plots, {} route images and {} tables",
            summary.plots.len(),
            summary.routes.len(),
            summary.tables.len()
        ),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
