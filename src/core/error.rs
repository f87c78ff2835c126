//! Error types and handling for the servlet runtime.
//!
//! Servlet-level failures are normally rendered in-band as error results and
//! never travel through this type to the host; the unified error serves the
//! binary entry point and library callers.

use thiserror::Error;

/// A specialized Result type for servlet runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the servlet runtime.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from a servlet.
    #[error("Servlet error: {0}")]
    Servlet(#[from] crate::servlets::ServletError),

    /// Error from the vault API boundary.
    #[error("Vault error: {0}")]
    Vault(#[from] crate::servlets::vault::client::VaultError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from the host boundary.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
