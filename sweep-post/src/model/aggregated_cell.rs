use super::{
    CellKey, TableRow, CHAIN_STRENGTH, COST_CONSTRAINT_RATIO, FAILED_ROUTES_COUNT, RELATIVE_COST,
    TRIALS,
};
use serde::{Deserialize, Serialize};

/// mean relative_cost of the successful trials in one parameter cell
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AverageCell {
    pub cost_constraint_ratio: f64,
    pub chain_strength: f64,
    pub relative_cost: f64,
    pub trials: usize,
}

impl AverageCell {
    pub fn new(key: &CellKey, relative_cost: f64, trials: usize) -> AverageCell {
        AverageCell {
            cost_constraint_ratio: key.cost_constraint_ratio.into_inner(),
            chain_strength: key.chain_strength.into_inner(),
            relative_cost,
            trials,
        }
    }
}

impl TableRow for AverageCell {
    fn column(&self, name: &str) -> Option<f64> {
        match name {
            COST_CONSTRAINT_RATIO => Some(self.cost_constraint_ratio),
            CHAIN_STRENGTH => Some(self.chain_strength),
            RELATIVE_COST => Some(self.relative_cost),
            TRIALS => Some(self.trials as f64),
            _ => None,
        }
    }
}

/// number of trials in one parameter cell that failed to find a route
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FailureCell {
    pub cost_constraint_ratio: f64,
    pub chain_strength: f64,
    pub failed_routes_count: usize,
}

impl FailureCell {
    pub fn new(key: &CellKey, failed_routes_count: usize) -> FailureCell {
        FailureCell {
            cost_constraint_ratio: key.cost_constraint_ratio.into_inner(),
            chain_strength: key.chain_strength.into_inner(),
            failed_routes_count,
        }
    }
}

impl TableRow for FailureCell {
    fn column(&self, name: &str) -> Option<f64> {
        match name {
            COST_CONSTRAINT_RATIO => Some(self.cost_constraint_ratio),
            CHAIN_STRENGTH => Some(self.chain_strength),
            FAILED_ROUTES_COUNT => Some(self.failed_routes_count as f64),
            _ => None,
        }
    }
}
