use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// identifies one cell of the parameter sweep. ordered by
/// cost_constraint_ratio, then chain_strength.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub cost_constraint_ratio: OrderedFloat<f64>,
    pub chain_strength: OrderedFloat<f64>,
}

impl CellKey {
    pub fn new(cost_constraint_ratio: f64, chain_strength: f64) -> CellKey {
        CellKey {
            cost_constraint_ratio: OrderedFloat(cost_constraint_ratio),
            chain_strength: OrderedFloat(chain_strength),
        }
    }
}

impl Display for CellKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(cost_constraint_ratio={}, chain_strength={})",
            self.cost_constraint_ratio, self.chain_strength
        )
    }
}
