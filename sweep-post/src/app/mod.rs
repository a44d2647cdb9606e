mod output_names;
mod post_process_ops;
mod post_process_summary;
mod sweep_app;

pub use output_names::{
    contours_filename, heatmap_filename, table_filename, AVERAGE_PREFIX, BEST_PREFIX,
    FAILURES_PREFIX, ROUTES_FOLDER,
};
pub use post_process_ops::{post_process, render_routes};
pub use post_process_summary::PostProcessSummary;
pub use sweep_app::SweepPostApp;
