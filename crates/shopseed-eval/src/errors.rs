use thiserror::Error;

/// Errors emitted while validating or describing a dataset.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
