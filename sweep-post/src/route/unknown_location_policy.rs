use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Enumerates alternative ways to handle a route stop
/// whose order_id is missing from the locations file
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnknownLocationPolicy {
    /// the render fails and the run is aborted
    #[default]
    Fail,
    /// a warning is logged and arrows touching the stop are not drawn
    Skip,
}
