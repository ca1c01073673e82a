//! # rota-shifts
//!
//! The shift-rotation engine.
//!
//! * [`mod@cycle`]: the static table of named rotation cycles.
//! * [`schedule`]: date → shift mapping anchored at [`ROTATION_EPOCH`], and
//!   generation of per-day schedules annotated with public holidays.
//! * [`weekend`]: Friday/Saturday long-weekend detection over a schedule.
//!
//! ```
//! use rota_shifts::{cycle, generate_schedule, Shift};
//! use rota_time::{Date, NoHolidays};
//!
//! let start = Date::from_ymd(2024, 10, 6).unwrap();
//! let end = Date::from_ymd(2024, 10, 13).unwrap();
//! let schedule = generate_schedule(start, end, cycle("A").unwrap(), &NoHolidays).unwrap();
//! assert_eq!(schedule.len(), 8);
//! assert_eq!(schedule.entries()[2].shift(), Shift::Off);
//! ```
//!
//! All operations are pure; they can be called from any number of threads.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Rotation cycles, the cycle table, and company/group selection.
pub mod cycle;

/// Inclusive date ranges and look-ahead presets.
pub mod range;

/// Shift lookup and schedule generation.
pub mod schedule;

/// `Shift`: Morning, Afternoon, Night, or Off.
pub mod shift;

/// Long-weekend detection.
pub mod weekend;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cycle::{cycle, cycle_for_group, cycle_names, Company, ShiftCycle, CYCLES};
pub use range::{DateRange, RangePreset};
pub use schedule::{generate_schedule, shift_for_date, Schedule, ScheduleEntry, ROTATION_EPOCH};
pub use shift::Shift;
pub use weekend::{find_long_weekends, long_weekend_blocks, WeekendBlock};
