//! # bizday-core
//!
//! Error definitions and tracing setup shared by the bizday crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Tracing subscriber initialisation.
pub mod logging;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use logging::init_tracing;
