use super::{
    route_codec, CellKey, TableRow, CHAIN_STRENGTH, COST_CONSTRAINT_RATIO, RELATIVE_COST, TRIAL,
};
use serde::{Deserialize, Serialize};

/// relative_cost written by the sweeper when no route was found.
pub const FAILED_RELATIVE_COST: f64 = -1.0;

/// a row of parameter sweep output.
///
/// CSV rows as currently defined (extra columns are ignored):
/// cost_constraint_ratio,chain_strength,trial,relative_cost,route
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrialRecord {
    pub cost_constraint_ratio: f64,
    pub chain_strength: f64,
    pub trial: i64,
    pub relative_cost: f64,
    #[serde(
        deserialize_with = "route_codec::deserialize",
        serialize_with = "route_codec::serialize"
    )]
    pub route: Vec<i64>,
}

impl TrialRecord {
    pub fn cell_key(&self) -> CellKey {
        CellKey::new(self.cost_constraint_ratio, self.chain_strength)
    }

    /// true if the sweeper failed to find a route for this trial
    pub fn is_failure(&self) -> bool {
        self.relative_cost == FAILED_RELATIVE_COST
    }

    /// file stem for this trial's route plot,
    /// `<cost_constraint_ratio>_<chain_strength>_<trial>_<relative_cost>`.
    pub fn route_plot_name(&self) -> String {
        format!(
            "{:?}_{:?}_{}_{:?}",
            self.cost_constraint_ratio, self.chain_strength, self.trial, self.relative_cost
        )
    }
}

impl TableRow for TrialRecord {
    fn column(&self, name: &str) -> Option<f64> {
        match name {
            COST_CONSTRAINT_RATIO => Some(self.cost_constraint_ratio),
            CHAIN_STRENGTH => Some(self.chain_strength),
            TRIAL => Some(self.trial as f64),
            RELATIVE_COST => Some(self.relative_cost),
            _ => None,
        }
    }
}
