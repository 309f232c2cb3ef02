use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed tasks file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode tasks: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to save tasks to {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to keep a copy of the unreadable tasks file at {}: {source}", path.display())]
    Preserve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No task ids left: the highest id {} is already in use", u32::MAX)]
    IdsExhausted,
}

pub type Result<T> = std::result::Result<T, StoreError>;
