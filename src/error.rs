//! Custom error types for the PsstBin client
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for PsstBin client operations
#[derive(Error, Debug)]
pub enum PsstError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input (paste ids, password policy, content)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Key derivation failed (empty password/salt or unavailable primitive)
    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    /// Authenticated decryption failed.
    ///
    /// Wrong password and corrupted/tampered ciphertext are indistinguishable
    /// here; AES-GCM rejects both with the same tag mismatch.
    #[error("Decryption failed: wrong password or corrupted data")]
    DecryptionFailed,

    /// The API returned a non-success status with a server-supplied message
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level HTTP failure (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(String),
}

impl PsstError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a decryption failure (retryable with another password)
    pub fn is_decryption_failed(&self) -> bool {
        matches!(self, Self::DecryptionFailed)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PsstError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PsstError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for PsstError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

/// Result type alias for PsstBin client operations
pub type PsstResult<T> = Result<T, PsstError>;
