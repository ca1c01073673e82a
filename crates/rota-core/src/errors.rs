//! Error types for shiftrota.
//!
//! All fallible operations in the workspace return [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below.  None of these
//! conditions are transient, so nothing in the library retries.

use thiserror::Error;

/// The top-level error type used throughout shiftrota.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction, parsing, or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No rotation cycle is registered under the given name.
    #[error("unknown shift cycle \"{0}\"")]
    UnknownCycle(String),

    /// A date range whose start lies after its end.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// Requested first day (ISO-8601).
        start: String,
        /// Requested last day (ISO-8601).
        end: String,
    },

    /// A holiday provider could not answer for a date.
    ///
    /// This is distinct from "no holiday on that date", which providers
    /// report as `Ok(None)`.
    #[error("holiday lookup failed in {calendar} for {date}: {reason}")]
    HolidayLookup {
        /// Name of the provider that failed.
        calendar: String,
        /// The date being looked up (ISO-8601).
        date: String,
        /// Why the provider could not answer.
        reason: String,
    },
}

/// Shorthand `Result` type used throughout shiftrota.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use rota_core::{ensure, errors::Error};
/// fn non_empty(xs: &[u8]) -> rota_core::errors::Result<usize> {
///     ensure!(!xs.is_empty(), "need at least one element, got {}", xs.len());
///     Ok(xs.len())
/// }
/// assert!(non_empty(&[1]).is_ok());
/// assert!(matches!(non_empty(&[]), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
