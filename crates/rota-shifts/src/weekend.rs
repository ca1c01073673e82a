//! Long-weekend detection.
//!
//! A long weekend is a Friday followed directly by a Saturday, both off.
//! The scan looks at adjacent entries only, so the input must be a gap-free
//! schedule such as one produced by
//! [`generate_schedule`](crate::schedule::generate_schedule).

use rota_time::Weekday;

use crate::schedule::ScheduleEntry;

/// A Friday/Saturday pair that is off on both days.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeekendBlock {
    /// The Friday.
    pub friday: ScheduleEntry,
    /// The Saturday that follows it.
    pub saturday: ScheduleEntry,
}

fn is_long_weekend(first: &ScheduleEntry, second: &ScheduleEntry) -> bool {
    first.weekday() == Weekday::Friday
        && first.shift().is_off()
        && second.weekday() == Weekday::Saturday
        && second.shift().is_off()
}

/// Every qualifying Friday/Saturday pair, in schedule order.
pub fn long_weekend_blocks(schedule: &[ScheduleEntry]) -> Vec<WeekendBlock> {
    schedule
        .windows(2)
        .filter(|pair| is_long_weekend(&pair[0], &pair[1]))
        .map(|pair| WeekendBlock {
            friday: pair[0].clone(),
            saturday: pair[1].clone(),
        })
        .collect()
}

/// The entries of every long weekend, flattened Friday then Saturday, in
/// schedule order.
///
/// Returns an empty vector when there is no qualifying pair, including for
/// an empty or single-entry input.
pub fn find_long_weekends(schedule: &[ScheduleEntry]) -> Vec<ScheduleEntry> {
    long_weekend_blocks(schedule)
        .into_iter()
        .flat_map(|block| [block.friday, block.saturday])
        .collect()
}
