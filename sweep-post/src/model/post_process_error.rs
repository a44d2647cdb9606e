#[derive(thiserror::Error, Debug)]
pub enum PostProcessError {
    #[error("input file '{0}' not found")]
    InputNotFound(String),
    #[error("failed reading '{filepath}': {error}")]
    ReadError { filepath: String, error: String },
    #[error("failed writing '{filepath}': {error}")]
    WriteError { filepath: String, error: String },
    #[error("locations file '{filepath}' failed validation: {error}")]
    LocationsValidationError { filepath: String, error: String },
    #[error("route references order_id {0} which is not in the locations collection")]
    UnknownLocation(i64),
    #[error("table has no column '{0}'")]
    UnknownColumn(String),
    #[error("pivot has conflicting values for cell ({row}, {col}): {previous} and {next}")]
    DuplicateCell {
        row: f64,
        col: f64,
        previous: f64,
        next: f64,
    },
    #[error("failed rendering '{filepath}': {error}")]
    RenderError { filepath: String, error: String },
    #[error("{0}")]
    ConfigurationError(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
