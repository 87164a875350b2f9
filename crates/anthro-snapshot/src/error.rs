use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no snapshot available: {0}")]
    Unavailable(String),
}
