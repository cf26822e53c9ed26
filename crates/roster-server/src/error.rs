//! Error types for the users server

use thiserror::Error;

/// Failures while producing or delivering a response.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// Payload could not be represented as JSON.
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Response could not be assembled from status, headers and body.
    #[error("Response build error: {0}")]
    Build(#[from] hyper::http::Error),

    /// Writing the response to the client failed.
    #[error("Transport error: {0}")]
    Transport(#[from] hyper::Error),
}

/// Errors loading the server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid RON or has the wrong shape.
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Result type for response operations.
pub type Result<T> = std::result::Result<T, ResponseError>;
