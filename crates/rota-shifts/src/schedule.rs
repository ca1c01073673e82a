//! Date → shift mapping and schedule generation.
//!
//! A [`Schedule`] holds one [`ScheduleEntry`] per calendar day of the
//! requested range, in ascending date order, with no gaps or duplicates.
//! Generation either covers the full range or fails; callers never see a
//! partial schedule.

use rota_core::errors::{Error, Result};
use rota_time::{Date, HolidayCalendar, Weekday};
use tracing::{debug, warn};

use crate::cycle::ShiftCycle;
use crate::shift::Shift;
use crate::weekend::find_long_weekends;

/// The anchor date at which index 0 of every cycle applies: 2024-10-06.
pub const ROTATION_EPOCH: Date = Date::from_ymd_unchecked(2024, 10, 6);

/// Return the shift worked on `date` under `cycle`.
///
/// Defined for every representable date: days before the epoch wrap around
/// the cycle backwards (2024-10-05 is the last index).
pub fn shift_for_date(date: Date, cycle: &ShiftCycle) -> Shift {
    let offset = date - ROTATION_EPOCH;
    let index = offset.rem_euclid(cycle.len() as i32) as usize;
    cycle.pattern()[index]
}

// ── ScheduleEntry ─────────────────────────────────────────────────────────────

/// One day of a schedule.
///
/// The weekday is always that of the date; deserializing a record whose
/// weekday disagrees with its date fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScheduleEntry {
    date: Date,
    weekday: Weekday,
    shift: Shift,
    #[cfg_attr(feature = "serde", serde(serialize_with = "holiday_serde::serialize"))]
    holiday: Option<String>,
}

impl ScheduleEntry {
    /// Create an entry; the weekday is derived from `date`.
    pub fn new(date: Date, shift: Shift, holiday: Option<String>) -> Self {
        Self {
            date,
            weekday: date.weekday(),
            shift,
            holiday,
        }
    }

    /// The calendar day.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Day of the week of [`date`](Self::date).
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// The shift worked that day.
    pub fn shift(&self) -> Shift {
        self.shift
    }

    /// Public holiday name, if any.
    pub fn holiday(&self) -> Option<&str> {
        self.holiday.as_deref()
    }

    /// Public holiday name, or `""` when the day is not a holiday.
    pub fn holiday_label(&self) -> &str {
        self.holiday().unwrap_or("")
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ScheduleEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Record {
            date: Date,
            weekday: Weekday,
            shift: Shift,
            #[serde(deserialize_with = "holiday_serde::deserialize")]
            holiday: Option<String>,
        }

        let record = Record::deserialize(deserializer)?;
        let actual = record.date.weekday();
        if record.weekday != actual {
            return Err(serde::de::Error::custom(format!(
                "{} is a {actual}, not a {}",
                record.date.to_iso_string(),
                record.weekday
            )));
        }
        Ok(ScheduleEntry::new(record.date, record.shift, record.holiday))
    }
}

#[cfg(feature = "serde")]
mod holiday_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(holiday: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(holiday.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let name = String::deserialize(d)?;
        Ok(if name.is_empty() { None } else { Some(name) })
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// A contiguous, date-ordered run of [`ScheduleEntry`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// All entries, ascending by date.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Number of days covered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }

    /// First day covered.
    pub fn start_date(&self) -> Option<Date> {
        self.entries.first().map(ScheduleEntry::date)
    }

    /// Last day covered.
    pub fn end_date(&self) -> Option<Date> {
        self.entries.last().map(ScheduleEntry::date)
    }

    /// The entry for `date`, if it lies within the schedule.
    pub fn entry_for(&self, date: Date) -> Option<&ScheduleEntry> {
        let start = self.start_date()?;
        let offset = usize::try_from(date - start).ok()?;
        self.entries.get(offset)
    }

    /// Entries that fall on a public holiday.
    pub fn holidays(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter().filter(|e| e.holiday.is_some())
    }

    /// Friday/Saturday pairs that are both off; see [`find_long_weekends`].
    pub fn long_weekends(&self) -> Vec<ScheduleEntry> {
        find_long_weekends(&self.entries)
    }

    /// Number of days per shift, in [`Shift::ALL`] order.
    pub fn shift_counts(&self) -> [(Shift, usize); 4] {
        Shift::ALL.map(|shift| {
            let n = self.entries.iter().filter(|e| e.shift == shift).count();
            (shift, n)
        })
    }

    /// Consume the schedule, returning its entries.
    pub fn into_entries(self) -> Vec<ScheduleEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

/// Build the schedule for every day from `start` to `end`, both inclusive.
///
/// # Errors
/// * [`Error::InvalidRange`] if `start > end`; the range is never reordered.
/// * Any error returned by `holidays`, unchanged.  No partial schedule is
///   returned.
pub fn generate_schedule<H>(
    start: Date,
    end: Date,
    cycle: &ShiftCycle,
    holidays: &H,
) -> Result<Schedule>
where
    H: HolidayCalendar + ?Sized,
{
    if start > end {
        return Err(Error::InvalidRange {
            start: start.to_iso_string(),
            end: end.to_iso_string(),
        });
    }

    let days = start.days_between(end) as usize + 1;
    debug!(
        cycle = cycle.name(),
        calendar = holidays.name(),
        start = %start.to_iso_string(),
        end = %end.to_iso_string(),
        days,
        "generating schedule"
    );

    let mut entries = Vec::with_capacity(days);
    for date in start.days_through(end) {
        let holiday = holidays.holiday_name(date).map_err(|e| {
            warn!(calendar = holidays.name(), error = %e, "holiday lookup failed");
            e
        })?;
        entries.push(ScheduleEntry::new(date, shift_for_date(date, cycle), holiday));
    }

    Ok(Schedule { entries })
}

#[cfg(test)]
mod tests {
    use rota_time::{BespokeCalendar, NoHolidays};

    use super::*;
    use crate::cycle::cycle;
    use crate::shift::Shift::{Afternoon, Morning, Night, Off};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn epoch_is_index_zero() {
        for c in &crate::cycle::CYCLES {
            assert_eq!(shift_for_date(ROTATION_EPOCH, c), c.pattern()[0], "{c}");
        }
    }

    #[test]
    fn day_before_epoch_wraps_to_last_index() {
        let a = cycle("A").unwrap();
        assert_eq!(shift_for_date(date(2024, 10, 5), a), Afternoon);
        let koc_a = cycle("KOC A").unwrap();
        assert_eq!(shift_for_date(date(2024, 10, 5), koc_a), Morning);
        assert_eq!(shift_for_date(date(2024, 10, 2), koc_a), Night);
    }

    #[test]
    fn cycle_a_first_period() {
        let s = generate_schedule(
            date(2024, 10, 6),
            date(2024, 10, 13),
            cycle("A").unwrap(),
            &NoHolidays,
        )
        .unwrap();
        let shifts: Vec<Shift> = s.iter().map(ScheduleEntry::shift).collect();
        assert_eq!(
            shifts,
            [Night, Night, Off, Off, Morning, Morning, Afternoon, Afternoon]
        );
        assert_eq!(s.start_date(), Some(date(2024, 10, 6)));
        assert_eq!(s.end_date(), Some(date(2024, 10, 13)));
        assert_eq!(s.entries()[0].weekday(), Weekday::Sunday);
    }

    #[test]
    fn single_day_range() {
        let d = date(2025, 3, 1);
        let s = generate_schedule(d, d, cycle("B").unwrap(), &NoHolidays).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.entries()[0].date(), d);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = generate_schedule(
            date(2024, 10, 13),
            date(2024, 10, 6),
            cycle("A").unwrap(),
            &NoHolidays,
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidRange {
                start: "2024-10-13".into(),
                end: "2024-10-06".into(),
            }
        );
    }

    #[test]
    fn holidays_are_attached() {
        let cal = BespokeCalendar::new("Test").with_holiday(date(2024, 10, 8), "Shutdown");
        let s = generate_schedule(
            date(2024, 10, 6),
            date(2024, 10, 10),
            cycle("C").unwrap(),
            &cal,
        )
        .unwrap();
        assert_eq!(s.entry_for(date(2024, 10, 8)).unwrap().holiday(), Some("Shutdown"));
        assert_eq!(s.entry_for(date(2024, 10, 9)).unwrap().holiday_label(), "");
        assert_eq!(s.holidays().count(), 1);
        assert!(s.entry_for(date(2024, 10, 5)).is_none());
        assert!(s.entry_for(date(2024, 10, 11)).is_none());
    }

    #[test]
    fn shift_counts_cover_every_day() {
        let s = generate_schedule(
            date(2024, 10, 6),
            date(2024, 11, 4),
            cycle("KOC C").unwrap(),
            &NoHolidays,
        )
        .unwrap();
        let counts = s.shift_counts();
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), s.len());
        assert_eq!(counts[1], (Afternoon, 0));
    }
}
