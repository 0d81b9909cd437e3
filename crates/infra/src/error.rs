use std::path::PathBuf;

use thiserror::Error;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfraError {
    #[error("failed to read dataset '{path}': {source}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset '{path}': {source}")]
    DatasetParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfraError>;
