use thiserror::Error;

/// Errors emitted while loading a dataset into staging.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset file not found: {0}")]
    MissingFile(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
