/// file prefix of the average relative_cost outputs
pub const AVERAGE_PREFIX: &str = "avg";
/// file prefix of the best relative_cost outputs
pub const BEST_PREFIX: &str = "best";
/// file prefix of the failure count outputs
pub const FAILURES_PREFIX: &str = "fails";
/// folder under the data directory receiving one image per trial
pub const ROUTES_FOLDER: &str = "routes";

pub fn heatmap_filename(prefix: &str, output: &str) -> String {
    format!("{prefix}_heatmap_{output}.png")
}

pub fn contours_filename(prefix: &str, output: &str) -> String {
    format!("{prefix}_contours_{output}.png")
}

pub fn table_filename(prefix: &str, output: &str) -> String {
    format!("{prefix}_table_{output}.csv")
}
