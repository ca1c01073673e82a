//! # rota-core
//!
//! Error definitions and small shared helpers for shiftrota.
//!
//! Every other crate in the workspace reports failures through the single
//! [`Error`] enum defined here, so callers only ever match on one type.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error type, `Result` alias, and the `ensure!` macro.
pub mod errors;

/// String parsing helpers.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
