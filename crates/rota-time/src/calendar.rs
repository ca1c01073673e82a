//! `HolidayCalendar` trait and the trivial provider.
//!
//! A holiday calendar answers one question: is this date a public holiday,
//! and if so, what is it called?  Providers keep "no holiday" (`Ok(None)`)
//! apart from "cannot tell" (`Err`), so a missing data table never silently
//! turns into an ordinary working day.

use rota_core::errors::Result;

use crate::date::Date;

/// A public-holiday provider.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Kuwait"`).
    fn name(&self) -> &str;

    /// Return the holiday name for `date`, or `None` if it is not a holiday.
    ///
    /// # Errors
    /// Returns [`Error::HolidayLookup`](rota_core::Error::HolidayLookup) when
    /// the provider has no data covering `date`.
    fn holiday_name(&self, date: Date) -> Result<Option<String>>;

    /// Return `true` if `date` is a holiday in this calendar.
    fn is_holiday(&self, date: Date) -> Result<bool> {
        Ok(self.holiday_name(date)?.is_some())
    }

    /// Collect every holiday in the inclusive range `[from, to]`.
    fn holidays_between(&self, from: Date, to: Date) -> Result<Vec<(Date, String)>> {
        let mut holidays = Vec::new();
        for d in from.days_through(to) {
            if let Some(name) = self.holiday_name(d)? {
                holidays.push((d, name));
            }
        }
        Ok(holidays)
    }
}

impl<C: HolidayCalendar + ?Sized> HolidayCalendar for &C {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn holiday_name(&self, date: Date) -> Result<Option<String>> {
        (**self).holiday_name(date)
    }
}

impl<C: HolidayCalendar + ?Sized> HolidayCalendar for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn holiday_name(&self, date: Date) -> Result<Option<String>> {
        (**self).holiday_name(date)
    }
}

/// A calendar without holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn name(&self) -> &str {
        "No Holidays"
    }

    fn holiday_name(&self, _date: Date) -> Result<Option<String>> {
        Ok(None)
    }
}
