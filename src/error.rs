//! Error types for the sensor stub

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitterError {
    #[error("Output stream failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Reading serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Histogram setup failed: {0:?}")]
    Metrics(hdrhistogram::CreationError),

    #[error("Emitter thread panicked")]
    ThreadPanicked,
}

pub type Result<T> = std::result::Result<T, EmitterError>;
