//! Probe error types.

use thiserror::Error;

/// Failures that end a probe run.
///
/// Non-JSON bodies and error statuses are not errors; they are reported.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("config error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for probe results.
pub type ProbeResult<T> = Result<T, ProbeError>;
