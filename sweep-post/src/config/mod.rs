mod grid_plot_style;
mod post_process_config;
mod route_plot_style;
mod typography;

pub use grid_plot_style::GridPlotStyle;
pub use post_process_config::PostProcessConfig;
pub use route_plot_style::RoutePlotStyle;
pub use typography::Typography;
