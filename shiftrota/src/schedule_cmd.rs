//! `schedule` and `shift` commands.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::{info, info_span};

use shiftrota::shifts::{
    cycle, cycle_for_group, generate_schedule, shift_for_date, Company, RangePreset, ShiftCycle,
};
use shiftrota::time::Date;

use crate::cli::{CycleArgs, ScheduleArgs, ShiftArgs, View};
use crate::config::RotaConfig;
use crate::render;

/// Today's local date.
fn today() -> Result<Date> {
    let now = chrono::Local::now().date_naive();
    let year = u16::try_from(now.year()).context("current year out of range")?;
    Ok(Date::from_ymd(year, now.month() as u8, now.day() as u8)?)
}

fn parse_date(s: &str, what: &str) -> Result<Date> {
    s.parse::<Date>().with_context(|| format!("invalid {what} date"))
}

/// Pick the cycle from `--company/--group`, `--cycle`, or the config file.
pub fn resolve_cycle(args: &CycleArgs, config: &RotaConfig) -> Result<&'static ShiftCycle> {
    if let (Some(company), Some(group)) = (&args.company, &args.group) {
        let company: Company = company.parse()?;
        return Ok(cycle_for_group(company, group)?);
    }
    let name = args.cycle.as_deref().unwrap_or(&config.cycle);
    Ok(cycle(name)?)
}

/// Resolve the requested range: explicit bounds win over a preset.
///
/// `today` is only consulted when no start date is given.
pub fn resolve_range(
    args: &ScheduleArgs,
    config: &RotaConfig,
    today: impl FnOnce() -> Result<Date>,
) -> Result<(Date, Date)> {
    let start = match &args.from {
        Some(s) => parse_date(s, "start")?,
        None => today()?,
    };
    if let Some(s) = &args.to {
        return Ok((start, parse_date(s, "end")?));
    }
    let preset: RangePreset = args.preset.as_deref().unwrap_or(&config.preset).parse()?;
    let range = preset.range_from(start)?;
    Ok((range.start(), range.end()))
}

pub fn run_schedule(args: &ScheduleArgs, config: &RotaConfig, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("schedule").entered();
    let cycle = resolve_cycle(&args.cycle, config)?;
    let (start, end) = resolve_range(args, config, today)?;
    let holidays = config.holiday_calendar();

    let schedule = generate_schedule(start, end, cycle, &*holidays).with_context(|| {
        format!(
            "failed to generate schedule for cycle {cycle} from {} to {}",
            start.to_iso_string(),
            end.to_iso_string()
        )
    })?;
    info!(cycle = cycle.name(), days = schedule.len(), "schedule generated");

    match args.view {
        View::Full => render::full(&schedule, args.format, out),
        View::Holidays => {
            let rows: Vec<_> = schedule.holidays().cloned().collect();
            render::holidays(&rows, args.format, out)
        }
        View::Weekends => render::weekends(&schedule.long_weekends(), args.format, out),
    }
}

pub fn run_shift(args: &ShiftArgs, config: &RotaConfig, out: &mut impl Write) -> Result<()> {
    let cycle = resolve_cycle(&args.cycle, config)?;
    let date = match &args.date {
        Some(s) => parse_date(s, "lookup")?,
        None => today()?,
    };
    let shift = shift_for_date(date, cycle);
    writeln!(out, "{} {} ({}): {shift}", cycle, date.to_iso_string(), date.weekday())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Format;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn cycle_args(cycle: Option<&str>, company: Option<&str>, group: Option<&str>) -> CycleArgs {
        CycleArgs {
            cycle: cycle.map(str::to_string),
            company: company.map(str::to_string),
            group: group.map(str::to_string),
        }
    }

    fn schedule_args(from: Option<&str>, to: Option<&str>, preset: Option<&str>) -> ScheduleArgs {
        ScheduleArgs {
            cycle: cycle_args(None, None, None),
            from: from.map(str::to_string),
            to: to.map(str::to_string),
            preset: preset.map(str::to_string),
            view: View::Full,
            format: Format::Table,
        }
    }

    #[test]
    fn cycle_resolution_order() {
        let config = RotaConfig::default();
        assert_eq!(resolve_cycle(&cycle_args(None, None, None), &config).unwrap().name(), "A");
        assert_eq!(
            resolve_cycle(&cycle_args(Some("KOC C"), None, None), &config).unwrap().name(),
            "KOC C"
        );
        assert_eq!(
            resolve_cycle(&cycle_args(None, Some("koc"), Some("d")), &config).unwrap().name(),
            "KOC D"
        );
        assert!(resolve_cycle(&cycle_args(Some("Z"), None, None), &config).is_err());
    }

    #[test]
    fn range_resolution() {
        let config = RotaConfig::default();
        let today = date(2024, 10, 6);
        let today = || -> Result<Date> { Ok(today) };

        let explicit = schedule_args(Some("2024-10-01"), Some("2024-10-31"), Some("week"));
        assert_eq!(
            resolve_range(&explicit, &config, today).unwrap(),
            (date(2024, 10, 1), date(2024, 10, 31))
        );

        let preset = schedule_args(None, None, Some("week"));
        assert_eq!(
            resolve_range(&preset, &config, today).unwrap(),
            (date(2024, 10, 6), date(2024, 10, 13))
        );

        let from_config = schedule_args(None, None, None);
        assert_eq!(
            resolve_range(&from_config, &config, today).unwrap(),
            (date(2024, 10, 6), date(2025, 10, 6))
        );

        assert!(resolve_range(&schedule_args(Some("soon"), None, None), &config, today).is_err());
    }

    #[test]
    fn inverted_explicit_range_fails_in_generation() {
        let config = RotaConfig::default();
        let args = schedule_args(Some("2024-10-13"), Some("2024-10-06"), None);
        let mut out = Vec::new();
        let err = run_schedule(&args, &config, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("invalid date range"), "{err:#}");
        assert!(out.is_empty());
    }

    #[test]
    fn shift_lookup_line() {
        let config = RotaConfig::default();
        let args = ShiftArgs {
            cycle: cycle_args(Some("A"), None, None),
            date: Some("2024-10-05".into()),
        };
        let mut out = Vec::new();
        run_shift(&args, &config, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A 2024-10-05 (Saturday): Afternoon\n");
    }
}
