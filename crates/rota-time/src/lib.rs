//! # rota-time
//!
//! Calendar dates, weekdays, and public-holiday providers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and the empty provider.
pub mod calendar;

/// Concrete holiday providers (country specific or user defined).
pub mod calendars;

/// `Date` type.
pub mod date;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{HolidayCalendar, NoHolidays};
pub use calendars::bespoke_calendar::BespokeCalendar;
pub use calendars::joint_calendar::JointCalendar;
pub use calendars::kuwait::Kuwait;
pub use date::Date;
pub use weekday::Weekday;
