use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Failures that abort the pipeline. Malformed rows and malformed numeric
/// fields are not represented here: they are filtered or coerced to defaults
/// and processing continues.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
