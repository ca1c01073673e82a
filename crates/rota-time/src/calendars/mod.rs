//! Concrete holiday providers.

/// User-defined named holidays.
pub mod bespoke_calendar;

/// Union of several providers.
pub mod joint_calendar;

/// Kuwait public holidays.
pub mod kuwait;
