use json_arr_path::PathError;

/// Errors raised by the collection helpers and the `json-dot` tool.
///
/// Lookups never fail; they fall back to a default. Only sampling, path
/// validation and input parsing report errors.
#[derive(Debug, thiserror::Error)]
pub enum ArrError {
    #[error("You requested {requested} items, but there are only {available} items available.")]
    InvalidArgument { requested: usize, available: usize },
    #[error("invalid path: {0}")]
    Path(#[from] PathError),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no value at path {0:?}")]
    NotFound(String),
    #[error("{0}")]
    Usage(String),
}
