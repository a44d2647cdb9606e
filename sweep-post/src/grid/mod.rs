//! pivots long-format tables into 2D grids keyed by the two sweep parameters.
mod duplicate_cell_policy;
mod grid_interpolation;
mod pivot_grid;

pub use duplicate_cell_policy::DuplicateCellPolicy;
pub use grid_interpolation::{axis_extent, interpolate};
pub use pivot_grid::PivotGrid;
