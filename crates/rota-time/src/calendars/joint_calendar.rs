//! Joint calendar: combines two or more holiday providers.

use rota_core::errors::Result;

use crate::calendar::HolidayCalendar;
use crate::date::Date;

/// A calendar whose holidays are the union of its constituents' holidays.
///
/// When several constituents name the same date, the names are joined with
/// `" / "` in constituent order.  A failure in any constituent is a failure
/// of the joint calendar.
pub struct JointCalendar {
    calendars: Vec<Box<dyn HolidayCalendar>>,
    name: String,
}

impl std::fmt::Debug for JointCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JointCalendar")
            .field("name", &self.name)
            .finish()
    }
}

impl JointCalendar {
    /// Create a joint calendar from a list of calendars.
    ///
    /// # Panics
    /// Panics if `calendars` is empty.
    pub fn new(calendars: Vec<Box<dyn HolidayCalendar>>) -> Self {
        assert!(!calendars.is_empty(), "JointCalendar requires at least one calendar");
        let name = calendars
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ");
        Self { calendars, name }
    }
}

impl HolidayCalendar for JointCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn holiday_name(&self, date: Date) -> Result<Option<String>> {
        let mut names = Vec::new();
        for cal in &self.calendars {
            if let Some(name) = cal.holiday_name(date)? {
                names.push(name);
            }
        }
        Ok(if names.is_empty() {
            None
        } else {
            Some(names.join(" / "))
        })
    }
}
