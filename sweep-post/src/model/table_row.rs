pub const COST_CONSTRAINT_RATIO: &str = "cost_constraint_ratio";
pub const CHAIN_STRENGTH: &str = "chain_strength";
pub const TRIAL: &str = "trial";
pub const RELATIVE_COST: &str = "relative_cost";
pub const TRIALS: &str = "trials";
pub const FAILED_ROUTES_COUNT: &str = "failed_routes_count";

/// a row of a long-format table whose numeric columns can be looked up by name,
/// which is what the pivot needs to turn a table into a 2D grid.
pub trait TableRow {
    /// the numeric value stored in the named column, or None if this
    /// table has no such column.
    fn column(&self, name: &str) -> Option<f64>;
}
