//! # hc-core
//!
//! Error types and shared definitions used by every holcal crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, `Result` alias, and convenience macros.
pub mod errors;

pub use errors::{Error, Result};
