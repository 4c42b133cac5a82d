use std::io;
use std::path::PathBuf;

use queens_core::QueensError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed record on line {line} of {}: {source}", path.display())]
    Json {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Stored placement {id} is corrupt: {source}")]
    Corrupt {
        id: u64,
        #[source]
        source: QueensError,
    },

    #[error("Placement id {id} is already in use")]
    DuplicateId { id: u64 },

    #[error("Placement {id} has {size} queens but was stored for n = {n}")]
    SizeMismatch { id: u64, n: usize, size: usize },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
