//! per-trial route maps: every location projected onto a local plane with the
//! trial's route drawn as directed arrows between consecutive stops.
mod arrow_geometry;
mod route_arrow;
mod route_renderer;
mod unknown_location_policy;

pub use arrow_geometry::{arrow_polygon, ArrowStyle};
pub use route_arrow::{route_arrows, RouteArrow};
pub use route_renderer::{render, RouteRenderer};
pub use unknown_location_policy::UnknownLocationPolicy;
