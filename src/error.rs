use thiserror::Error;

pub type Result<T> = std::result::Result<T, TableroError>;

#[derive(Debug, Error)]
pub enum TableroError {
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Index {index} out of range for length {len}")]
    InvalidIndex { index: usize, len: usize },

    #[error("Invalid board snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
