//! Unified error types for the file server clients.

use thiserror::Error;

/// Unified error type for the file server clients.
///
/// A failed exchange terminates the tool; nothing is retried or recovered.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ClientError>;
