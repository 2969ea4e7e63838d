//! Unified error types for the gateway core.

use thiserror::Error;

/// Main error type for gateway setup and plumbing.
///
/// Per-call failures of the remote service are reported as
/// [`mds_types::UpstreamError`] directly by the gateway operations, and config
/// loading returns [`mds_types::ConfigError`]; this type covers the rest.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// HTTP client could not be built.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Logging subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias for gateway core operations.
pub type AppResult<T> = Result<T, AppError>;
