//! Command handlers for the Tryst CLI.

pub mod decode;
pub mod link;
pub mod misc;
pub mod pick;
pub mod resolve;
pub mod share;
pub mod show;
