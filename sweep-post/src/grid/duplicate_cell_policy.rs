use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Enumerates alternative ways to handle a pivot that receives
/// more than one value for the same (row, col) cell
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateCellPolicy {
    /// the value read last is kept
    #[default]
    LastWins,
    /// the pivot fails if the values differ
    Reject,
}
