//! bitmap rendering of pivot grids: annotated heatmaps and filled contour plots.
mod colorbar;
mod colormap;
mod contour_levels;
mod contour_plot;
mod heatmap_plot;
mod number_format;
mod typography_ops;

pub use colormap::{contrasting_text, normalize, Colormap};
pub use contour_levels::{band_index, nice_levels};
pub use contour_plot::contour;
pub use heatmap_plot::heatmap;
pub use number_format::format_general;
pub use typography_ops::{font, text_enabled};
