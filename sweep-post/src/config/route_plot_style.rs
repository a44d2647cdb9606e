use serde::{Deserialize, Serialize};

/// styling of the per-trial route plots. arrow dimensions are in pixels.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct RoutePlotStyle {
    pub width: u32,
    pub height: u32,
    pub point_radius: u32,
    /// fraction of each arrow's length removed at each end
    pub arrow_shrink: f64,
    pub arrow_width: f64,
    pub arrow_head_length: f64,
    pub arrow_head_width: f64,
    /// margin around the projected locations as a fraction of their extent
    pub padding: f64,
}

impl Default for RoutePlotStyle {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 900,
            point_radius: 5,
            arrow_shrink: 0.15,
            arrow_width: 6.0,
            arrow_head_length: 14.0,
            arrow_head_width: 14.0,
            padding: 0.05,
        }
    }
}
