use std::path::PathBuf;

use thiserror::Error;

/// Failures loading the persisted region configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("region config {0} not found, run `calibrate` first")]
    Missing(PathBuf),

    #[error("failed to read region config: {0}")]
    Io(#[from] std::io::Error),

    #[error("region config is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failures in the capture-and-recognize pipeline. An empty recognition
/// result is not an error; extractors return `Ok("")` for that.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("screen capture failed: {0}")]
    Capture(String),

    #[error("text recognition failed: {0}")]
    Recognition(String),
}

/// Failures talking to the remote model.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("API error: {0}")]
    Api(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("authentication error")]
    Auth,
}
