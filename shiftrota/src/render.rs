//! Plain-text and JSON rendering of schedules.

use std::io::Write;

use anyhow::Result;

use shiftrota::shifts::{Schedule, ScheduleEntry, CYCLES};

use crate::cli::Format;

fn table_header(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{:<10}  {:<9}  {:<9}  Holiday", "Date", "Day", "Shift")?;
    Ok(())
}

fn table_row(entry: &ScheduleEntry, out: &mut impl Write) -> Result<()> {
    let line = format!(
        "{:<10}  {:<9}  {:<9}  {}",
        entry.date().to_iso_string(),
        entry.weekday(),
        entry.shift(),
        entry.holiday_label()
    );
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

fn json(rows: &[ScheduleEntry], out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}

/// Every day of the schedule, followed by a per-shift summary line.
pub fn full(schedule: &Schedule, format: Format, out: &mut impl Write) -> Result<()> {
    if format == Format::Json {
        return json(schedule.entries(), out);
    }
    table_header(out)?;
    for entry in schedule {
        table_row(entry, out)?;
    }
    let summary = schedule
        .shift_counts()
        .iter()
        .map(|(shift, n)| format!("{shift} {n}"))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "\n{} days: {summary}", schedule.len())?;
    Ok(())
}

/// Only the public holidays in the schedule.
pub fn holidays(rows: &[ScheduleEntry], format: Format, out: &mut impl Write) -> Result<()> {
    if format == Format::Json {
        return json(rows, out);
    }
    if rows.is_empty() {
        writeln!(out, "No holidays found in the selected range.")?;
        return Ok(());
    }
    for entry in rows {
        writeln!(
            out,
            "{:<17}  {:<9}  {}",
            entry.date().to_string(),
            entry.weekday(),
            entry.holiday_label()
        )?;
    }
    Ok(())
}

/// Long-weekend entries, a blank line between each Friday/Saturday pair.
pub fn weekends(rows: &[ScheduleEntry], format: Format, out: &mut impl Write) -> Result<()> {
    if format == Format::Json {
        return json(rows, out);
    }
    if rows.is_empty() {
        writeln!(out, "No long weekends found in this range.")?;
        return Ok(());
    }
    table_header(out)?;
    for (i, pair) in rows.chunks(2).enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        for entry in pair {
            table_row(entry, out)?;
        }
    }
    Ok(())
}

/// The cycle table, one cycle per line.
pub fn cycles(out: &mut impl Write) -> Result<()> {
    for c in &CYCLES {
        let pattern = c
            .pattern()
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "{:<5}  {}-day  {pattern}", c.name(), c.len())?;
    }
    Ok(())
}
