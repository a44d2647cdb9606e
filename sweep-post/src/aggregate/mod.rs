//! grouped statistics over the trials of each (cost_constraint_ratio, chain_strength) cell.
mod aggregate_ops;

pub use aggregate_ops::{average, best, failures, split_outcomes};
