//! Kuwait public holidays.
//!
//! Civil holidays are fixed Gregorian dates.  Religious holidays follow the
//! Hijri (lunar) calendar and move about eleven days earlier every Gregorian
//! year.  Up to 2030 they come from a hand-authored table of expected dates;
//! the government may announce an observance a day either side, so update the
//! table when that happens.  Later years fall back to the arithmetic Hijri
//! calendar, which can be a day out, and those names carry an
//! `" (estimated)"` suffix.

use rota_core::errors::{Error, Result};

use crate::calendar::HolidayCalendar;
use crate::date::Date;

/// Kuwait calendar.
///
/// Fixed holidays:
/// * New Year's Day (Jan 1)
/// * National Day (Feb 25)
/// * Liberation Day (Feb 26)
///
/// Lunar holidays, tabulated for 2020–2030 and estimated for 2031–2050:
/// * Isra' and Mi'raj (27 Rajab)
/// * Eid al-Fitr (1–3 Shawwal)
/// * Arafat Day (9 Dhu al-Hijjah)
/// * Eid al-Adha (10–12 Dhu al-Hijjah)
/// * Islamic New Year (1 Muharram)
/// * Prophet's Birthday (12 Rabi' al-Awwal)
///
/// Holidays falling on the same day are joined with `" / "`.  Every date
/// outside 2020–2050, fixed holidays included, fails with
/// [`Error::HolidayLookup`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Kuwait;

impl Kuwait {
    /// First year covered by the lunar holiday table.
    pub const FIRST_TABULATED_YEAR: u16 = 2020;

    /// Last year covered by the lunar holiday table.
    pub const LAST_TABULATED_YEAR: u16 = 2030;

    /// Last year for which lunar holidays are estimated.
    pub const LAST_ESTIMATED_YEAR: u16 = 2050;

    /// Return `true` if lunar holidays for `year` come from the table.
    pub fn is_tabulated(year: u16) -> bool {
        (Self::FIRST_TABULATED_YEAR..=Self::LAST_TABULATED_YEAR).contains(&year)
    }

    /// Return `true` if the calendar can answer for dates in `year`.
    pub fn is_covered(year: u16) -> bool {
        (Self::FIRST_TABULATED_YEAR..=Self::LAST_ESTIMATED_YEAR).contains(&year)
    }
}

impl HolidayCalendar for Kuwait {
    fn name(&self) -> &str {
        "Kuwait"
    }

    fn holiday_name(&self, date: Date) -> Result<Option<String>> {
        let year = date.year();
        if !Self::is_covered(year) {
            return Err(Error::HolidayLookup {
                calendar: self.name().to_string(),
                date: date.to_iso_string(),
                reason: format!(
                    "holidays are only known for {}-{}",
                    Self::FIRST_TABULATED_YEAR,
                    Self::LAST_ESTIMATED_YEAR
                ),
            });
        }

        let mut names: Vec<String> = Vec::new();
        if let Some(name) = fixed_holiday(date.month(), date.day_of_month()) {
            names.push(name.to_string());
        }
        if Self::is_tabulated(year) {
            names.extend(lunar_holidays(date).map(str::to_string));
        } else if let Some(name) = estimated_lunar_holiday(date) {
            names.push(format!("{name} (estimated)"));
        }

        if names.is_empty() {
            Ok(None)
        } else {
            Ok(Some(names.join(" / ")))
        }
    }
}

fn fixed_holiday(month: u8, day: u8) -> Option<&'static str> {
    match (month, day) {
        (1, 1) => Some("New Year's Day"),
        (2, 25) => Some("National Day"),
        (2, 26) => Some("Liberation Day"),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lunar {
    IsraMiraj,
    EidAlFitr,
    EidAlAdha,
    IslamicNewYear,
    ProphetsBirthday,
}

/// Names of the lunar holidays observed on `date`.
fn lunar_holidays(date: Date) -> impl Iterator<Item = &'static str> {
    LUNAR_TABLE.iter().filter_map(move |&(anchor, kind)| {
        match (kind, date - anchor) {
            (Lunar::IsraMiraj, 0) => Some("Isra' and Mi'raj"),
            (Lunar::EidAlFitr, 0) => Some("Eid al-Fitr"),
            (Lunar::EidAlFitr, 1 | 2) => Some("Eid al-Fitr Holiday"),
            (Lunar::EidAlAdha, -1) => Some("Arafat Day"),
            (Lunar::EidAlAdha, 0) => Some("Eid al-Adha"),
            (Lunar::EidAlAdha, 1 | 2) => Some("Eid al-Adha Holiday"),
            (Lunar::IslamicNewYear, 0) => Some("Islamic New Year"),
            (Lunar::ProphetsBirthday, 0) => Some("Prophet's Birthday"),
            _ => None,
        }
    })
}

const fn ymd(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd_unchecked(y, m, d)
}

/// Anchor dates: the holiday itself, or the first day of Eid.
static LUNAR_TABLE: &[(Date, Lunar)] = &[
    // 2020
    (ymd(2020, 3, 22), Lunar::IsraMiraj),
    (ymd(2020, 5, 24), Lunar::EidAlFitr),
    (ymd(2020, 7, 31), Lunar::EidAlAdha),
    (ymd(2020, 8, 20), Lunar::IslamicNewYear),
    (ymd(2020, 10, 29), Lunar::ProphetsBirthday),
    // 2021
    (ymd(2021, 3, 11), Lunar::IsraMiraj),
    (ymd(2021, 5, 13), Lunar::EidAlFitr),
    (ymd(2021, 7, 20), Lunar::EidAlAdha),
    (ymd(2021, 8, 9), Lunar::IslamicNewYear),
    (ymd(2021, 10, 18), Lunar::ProphetsBirthday),
    // 2022
    (ymd(2022, 2, 28), Lunar::IsraMiraj),
    (ymd(2022, 5, 2), Lunar::EidAlFitr),
    (ymd(2022, 7, 9), Lunar::EidAlAdha),
    (ymd(2022, 7, 30), Lunar::IslamicNewYear),
    (ymd(2022, 10, 8), Lunar::ProphetsBirthday),
    // 2023
    (ymd(2023, 2, 18), Lunar::IsraMiraj),
    (ymd(2023, 4, 21), Lunar::EidAlFitr),
    (ymd(2023, 6, 28), Lunar::EidAlAdha),
    (ymd(2023, 7, 19), Lunar::IslamicNewYear),
    (ymd(2023, 9, 27), Lunar::ProphetsBirthday),
    // 2024
    (ymd(2024, 2, 8), Lunar::IsraMiraj),
    (ymd(2024, 4, 10), Lunar::EidAlFitr),
    (ymd(2024, 6, 16), Lunar::EidAlAdha),
    (ymd(2024, 7, 7), Lunar::IslamicNewYear),
    (ymd(2024, 9, 15), Lunar::ProphetsBirthday),
    // 2025
    (ymd(2025, 1, 27), Lunar::IsraMiraj),
    (ymd(2025, 3, 30), Lunar::EidAlFitr),
    (ymd(2025, 6, 6), Lunar::EidAlAdha),
    (ymd(2025, 6, 26), Lunar::IslamicNewYear),
    (ymd(2025, 9, 4), Lunar::ProphetsBirthday),
    // 2026
    (ymd(2026, 1, 16), Lunar::IsraMiraj),
    (ymd(2026, 3, 20), Lunar::EidAlFitr),
    (ymd(2026, 5, 27), Lunar::EidAlAdha),
    (ymd(2026, 6, 16), Lunar::IslamicNewYear),
    (ymd(2026, 8, 25), Lunar::ProphetsBirthday),
    // 2027: Rajab 27 falls twice
    (ymd(2027, 1, 5), Lunar::IsraMiraj),
    (ymd(2027, 3, 9), Lunar::EidAlFitr),
    (ymd(2027, 5, 16), Lunar::EidAlAdha),
    (ymd(2027, 6, 6), Lunar::IslamicNewYear),
    (ymd(2027, 8, 14), Lunar::ProphetsBirthday),
    (ymd(2027, 12, 25), Lunar::IsraMiraj),
    // 2028
    (ymd(2028, 2, 26), Lunar::EidAlFitr),
    (ymd(2028, 5, 5), Lunar::EidAlAdha),
    (ymd(2028, 5, 25), Lunar::IslamicNewYear),
    (ymd(2028, 8, 3), Lunar::ProphetsBirthday),
    (ymd(2028, 12, 14), Lunar::IsraMiraj),
    // 2029
    (ymd(2029, 2, 14), Lunar::EidAlFitr),
    (ymd(2029, 4, 24), Lunar::EidAlAdha),
    (ymd(2029, 5, 14), Lunar::IslamicNewYear),
    (ymd(2029, 7, 24), Lunar::ProphetsBirthday),
    (ymd(2029, 12, 3), Lunar::IsraMiraj),
    // 2030
    (ymd(2030, 2, 4), Lunar::EidAlFitr),
    (ymd(2030, 4, 13), Lunar::EidAlAdha),
    (ymd(2030, 5, 3), Lunar::IslamicNewYear),
    (ymd(2030, 7, 13), Lunar::ProphetsBirthday),
    (ymd(2030, 11, 22), Lunar::IsraMiraj),
];

// ── Arithmetic Hijri calendar ────────────────────────────────────────────────

/// Julian day number of 1 Muharram AH 1.
const HIJRI_EPOCH_JDN: i32 = 1_948_440;

/// Julian day number of serial 0 (1899-12-31).
const SERIAL_EPOCH_JDN: i32 = 2_415_020;

/// Julian day number of a Hijri date in the 30-year arithmetic cycle.
fn hijri_to_jdn(year: i32, month: i32, day: i32) -> i32 {
    day + (59 * (month - 1) + 1) / 2 + (year - 1) * 354 + (3 + 11 * year) / 30 + HIJRI_EPOCH_JDN
        - 1
}

/// Arithmetic Hijri `(year, month, day)` of `date`.
fn hijri_from_date(date: Date) -> (i32, i32, i32) {
    let jdn = date.serial() + SERIAL_EPOCH_JDN;
    let mut year = (30 * (jdn - HIJRI_EPOCH_JDN) + 10_646) / 10_631;
    while jdn < hijri_to_jdn(year, 1, 1) {
        year -= 1;
    }
    while jdn >= hijri_to_jdn(year + 1, 1, 1) {
        year += 1;
    }
    let mut month = 1;
    while month < 12 && jdn >= hijri_to_jdn(year, month + 1, 1) {
        month += 1;
    }
    (year, month, jdn - hijri_to_jdn(year, month, 1) + 1)
}

/// Lunar holiday on `date` by the arithmetic calendar.
fn estimated_lunar_holiday(date: Date) -> Option<&'static str> {
    let (_, month, day) = hijri_from_date(date);
    match (month, day) {
        (1, 1) => Some("Islamic New Year"),
        (3, 12) => Some("Prophet's Birthday"),
        (7, 27) => Some("Isra' and Mi'raj"),
        (10, 1) => Some("Eid al-Fitr"),
        (10, 2 | 3) => Some("Eid al-Fitr Holiday"),
        (12, 9) => Some("Arafat Day"),
        (12, 10) => Some("Eid al-Adha"),
        (12, 11 | 12) => Some("Eid al-Adha Holiday"),
        _ => None,
    }
}
