//! Bespoke calendar: a calendar with user-defined, named holidays.

use std::collections::BTreeMap;

use rota_core::errors::Result;

use crate::calendar::HolidayCalendar;
use crate::date::Date;

/// A calendar where holidays are added manually at run time.
///
/// Useful for company-specific days off, or as a stub provider in tests.
#[derive(Debug, Clone)]
pub struct BespokeCalendar {
    name: String,
    holidays: BTreeMap<Date, String>,
}

impl BespokeCalendar {
    /// Create a new bespoke calendar with the given name and no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeMap::new(),
        }
    }

    /// Add a holiday, replacing any name already registered for `date`.
    pub fn add_holiday(&mut self, date: Date, name: impl Into<String>) {
        self.holidays.insert(date, name.into());
    }

    /// Builder-style variant of [`add_holiday`](Self::add_holiday).
    pub fn with_holiday(mut self, date: Date, name: impl Into<String>) -> Self {
        self.add_holiday(date, name);
        self
    }

    /// Remove a previously added holiday.
    pub fn remove_holiday(&mut self, date: Date) {
        self.holidays.remove(&date);
    }

    /// Return the number of explicitly-added holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl HolidayCalendar for BespokeCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn holiday_name(&self, date: Date) -> Result<Option<String>> {
        Ok(self.holidays.get(&date).cloned())
    }

    fn holidays_between(&self, from: Date, to: Date) -> Result<Vec<(Date, String)>> {
        if to < from {
            return Ok(Vec::new());
        }
        Ok(self
            .holidays
            .range(from..=to)
            .map(|(d, name)| (*d, name.clone()))
            .collect())
    }
}
