//! # shiftrota
//!
//! Repeating work-shift rotation calendars, annotated with public holidays,
//! and the long weekends they produce.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `rota-*` crates.
//!
//! ```rust
//! use shiftrota::shifts::{cycle, generate_schedule};
//! use shiftrota::time::{Date, Kuwait};
//!
//! let start = Date::from_ymd(2025, 2, 24).unwrap();
//! let end = Date::from_ymd(2025, 2, 27).unwrap();
//! let schedule = generate_schedule(start, end, cycle("KOC A").unwrap(), &Kuwait).unwrap();
//! assert_eq!(schedule.holidays().count(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and shared helpers.
pub use rota_core as core;

/// Dates, weekdays, and holiday providers.
pub use rota_time as time;

/// Cycle table, schedule generation, and long-weekend detection.
pub use rota_shifts as shifts;
