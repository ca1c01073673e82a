//! Date ranges and quick-select presets.

use std::str::FromStr;

use rota_core::errors::{Error, Result};
use rota_time::Date;

/// An inclusive, validated date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Create a range covering `start` through `end`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if `start > end`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange {
                start: start.to_iso_string(),
                end: end.to_iso_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// First day.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Number of days covered, counting both ends.
    pub fn days(&self) -> usize {
        self.start.days_between(self.end) as usize + 1
    }
}

/// Common look-ahead windows, each starting today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangePreset {
    /// Today plus 7 days.
    NextWeek,
    /// Today plus 30 days.
    NextMonth,
    /// Today plus 90 days.
    NextThreeMonths,
    /// Today plus 180 days.
    NextSixMonths,
    /// Today plus 365 days.
    NextYear,
}

impl RangePreset {
    /// Days added to today to reach the end of the window.
    pub fn span_days(self) -> i32 {
        match self {
            RangePreset::NextWeek => 7,
            RangePreset::NextMonth => 30,
            RangePreset::NextThreeMonths => 90,
            RangePreset::NextSixMonths => 180,
            RangePreset::NextYear => 365,
        }
    }

    /// The window starting at `today`.
    ///
    /// # Errors
    /// Returns [`Error::Date`] if the window would run past [`Date::MAX`].
    pub fn range_from(self, today: Date) -> Result<DateRange> {
        DateRange::new(today, today.add_days(self.span_days())?)
    }
}

impl FromStr for RangePreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(RangePreset::NextWeek),
            "month" => Ok(RangePreset::NextMonth),
            "3-months" => Ok(RangePreset::NextThreeMonths),
            "6-months" => Ok(RangePreset::NextSixMonths),
            "year" => Ok(RangePreset::NextYear),
            other => Err(Error::InvalidArgument(format!(
                "unknown range preset \"{other}\", expected week, month, 3-months, 6-months or year"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn range_validation() {
        let r = DateRange::new(date(2024, 10, 6), date(2024, 10, 13)).unwrap();
        assert_eq!(r.days(), 8);
        assert_eq!(DateRange::new(date(2024, 1, 1), date(2024, 1, 1)).unwrap().days(), 1);
        assert!(matches!(
            DateRange::new(date(2024, 1, 2), date(2024, 1, 1)),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn presets() {
        let today = date(2024, 12, 30);
        let r = RangePreset::NextWeek.range_from(today).unwrap();
        assert_eq!((r.start(), r.end()), (today, date(2025, 1, 6)));
        let r = RangePreset::NextYear.range_from(today).unwrap();
        assert_eq!(r.days(), 366);
        assert!(RangePreset::NextYear.range_from(Date::MAX).is_err());
    }

    #[test]
    fn parse_presets() {
        assert_eq!("Week".parse::<RangePreset>(), Ok(RangePreset::NextWeek));
        assert_eq!("6-months".parse::<RangePreset>(), Ok(RangePreset::NextSixMonths));
        assert!("fortnight".parse::<RangePreset>().is_err());
    }
}
