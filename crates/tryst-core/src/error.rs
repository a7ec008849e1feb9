//! Error types for tryst core operations.
//!
//! Failures are typed at this level so tests and callers can tell them
//! apart; the CLI layer flattens them to generic user-facing messages.

use thiserror::Error;

/// Result type alias for tryst operations.
pub type Result<T> = std::result::Result<T, TrystError>;

/// Core error type for tryst operations.
#[derive(Debug, Error)]
pub enum TrystError {
    /// Malformed envelope structure or unsupported version
    #[error("Format error: {0}")]
    Format(String),

    /// Authenticated decryption failed. Covers both a wrong passphrase
    /// and tampered ciphertext; the two are indistinguishable on purpose.
    #[error("Authentication failed")]
    Authentication,

    /// Decrypted bytes do not have the expected payload shape
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// A path's prefix or schedule segment did not resolve
    #[error("Unrecognized route: {0}")]
    UnrecognizedRoute(String),

    /// Key derivation or cipher internal error
    #[error("Crypto error: {0}")]
    Crypto(String),
}
