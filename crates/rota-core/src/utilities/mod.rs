//! Miscellaneous utilities.

/// Date string parsers.
pub mod data_parsers;
