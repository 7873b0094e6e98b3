use std::io;
use thiserror::Error;

/// Custom error types for the prayer-times application
#[derive(Error, Debug)]
pub enum AppError {
    /// Error when the request could not reach the service or the body could not be read
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Error when a response body is not valid JSON or lacks an expected field
    #[error("Failed to parse API response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Error when a required configuration value is missing
    #[error("Configuration error: {0} is not set")]
    Config(String),

    /// Wrong command-line arguments; carries the usage text
    #[error("{0}")]
    Usage(String),

    /// Error when API request fails
    #[error("API request failed: {0}")]
    ApiRequestFailed(String),

    /// No usable IPv4 address on any local interface
    #[error("No non-loopback IPv4 address found on local interfaces")]
    NoIpAddress,

    /// Wrapper for I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
