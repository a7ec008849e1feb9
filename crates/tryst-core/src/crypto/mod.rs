//! Passphrase-based encryption for portable share codes.
//!
//! Two layers: `kdf` turns a passphrase and salt into a symmetric key,
//! `envelope` wraps payload bytes in an authenticated, versioned text
//! envelope that carries everything needed to reverse it except the
//! passphrase itself.

pub mod envelope;
pub mod kdf;

pub use envelope::{open, seal};
pub use kdf::derive_key;
