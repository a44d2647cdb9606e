use crate::render::Colormap;
use serde::{Deserialize, Serialize};

/// styling shared by the heatmap and contour plots
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct GridPlotStyle {
    /// image width in pixels
    pub width: u32,
    /// image height in pixels
    pub height: u32,
    pub colormap: Colormap,
    /// write each heatmap cell's value inside the cell
    pub annotate: bool,
    /// significant digits of heatmap annotations
    pub annotation_digits: usize,
    /// number of filled contour bands to aim for
    pub contour_levels: usize,
    /// interpolation samples along each axis of a contour plot
    pub contour_resolution: usize,
    /// pixels reserved to the right of the plot for the colorbar
    pub colorbar_width: u32,
}

impl Default for GridPlotStyle {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 900,
            colormap: Colormap::CoolwarmR,
            annotate: true,
            annotation_digits: 2,
            contour_levels: 10,
            contour_resolution: 200,
            colorbar_width: 130,
        }
    }
}
