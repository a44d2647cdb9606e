mod aggregated_cell;
mod cell_key;
mod location;
mod location_collection;
mod post_process_error;
pub mod route_codec;
mod table_row;
mod trial_record;

pub use aggregated_cell::{AverageCell, FailureCell};
pub use cell_key::CellKey;
pub use location::Location;
pub use location_collection::LocationCollection;
pub use post_process_error::PostProcessError;
pub use table_row::{
    TableRow, CHAIN_STRENGTH, COST_CONSTRAINT_RATIO, FAILED_ROUTES_COUNT, RELATIVE_COST, TRIAL,
    TRIALS,
};
pub use trial_record::{TrialRecord, FAILED_RELATIVE_COST};
