//! # Tryst Core
//!
//! Core library for Tryst - a date-plan picker whose results travel as
//! passphrase-protected secret codes or compact shareable links.
//!
//! This crate provides the domain vocabulary, codecs, and crypto
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **selection**: the closed category/schedule vocabulary and alias tables
//! - **payload**: selection to/from canonical payload bytes
//! - **crypto**: passphrase key derivation and the authenticated envelope
//! - **route**: friendly result paths and the results query string
//!
//! Everything here is a pure function over explicit inputs; persistence
//! and prompting live with the caller.

pub mod crypto;
pub mod error;
pub mod payload;
pub mod route;
pub mod selection;

pub use error::{Result, TrystError};
pub use selection::{Category, ScheduleSlot, Selection};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
