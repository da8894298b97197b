//! Day confirmation, correction and deletion commands.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use mz_core::format::format_hours;
use mz_core::time_calc::calculate_paid_total_hours;
use mz_core::{DayEntry, DayType, EntryUpdate, ValidationError, clock, edit};

use crate::Config;
use crate::store::EntryStore;

/// One-line summary of a stored entry.
pub fn describe_entry(entry: &DayEntry) -> String {
    let status = if entry.confirmed_work_day {
        "confirmed"
    } else {
        "unconfirmed"
    };
    match entry.day_type {
        DayType::Work => format!(
            "{}: work day {}-{}, break {} min, {} h paid ({status})",
            entry.date,
            clock::format(entry.work_start),
            clock::format(entry.work_end),
            entry.break_minutes,
            format_hours(calculate_paid_total_hours(entry)),
        ),
        DayType::Off => format!(
            "{}: day off, {} h travel ({status})",
            entry.date,
            format_hours(calculate_paid_total_hours(entry)),
        ),
    }
}

fn store_and_report<W: Write>(writer: &mut W, store: &mut EntryStore, entry: DayEntry) -> Result<()> {
    writeln!(writer, "{}", describe_entry(&entry))?;
    store.upsert(entry);
    store
        .save()
        .with_context(|| format!("failed to save {}", store.path().display()))
}

/// Confirms `date` as a work day using the configured schedule for new entries.
pub fn confirm_work<W: Write>(
    writer: &mut W,
    store: &mut EntryStore,
    config: &Config,
    date: NaiveDate,
) -> Result<()> {
    let entry = edit::confirm_work_day(store.get(date).cloned(), date, &config.schedule());
    tracing::info!(%date, "confirmed work day");
    store_and_report(writer, store, entry)
}

/// Confirms `date` as a day off.
pub fn confirm_off<W: Write>(writer: &mut W, store: &mut EntryStore, date: NaiveDate) -> Result<()> {
    let entry = edit::confirm_off_day(store.get(date).cloned(), date);
    tracing::info!(%date, "confirmed day off");
    store_and_report(writer, store, entry)
}

/// Changes the day type of `date`.
pub fn set_day_type<W: Write>(
    writer: &mut W,
    store: &mut EntryStore,
    date: NaiveDate,
    day_type: DayType,
) -> Result<()> {
    let entry = edit::set_day_type(store.get(date).cloned(), date, day_type);
    tracing::info!(%date, %day_type, "set day type");
    store_and_report(writer, store, entry)
}

/// Applies field corrections to the entry of `date`.
pub fn edit_entry<W: Write>(
    writer: &mut W,
    store: &mut EntryStore,
    date: NaiveDate,
    update: EntryUpdate,
) -> Result<()> {
    if update.is_empty() {
        anyhow::bail!("Nothing to change. Use --start, --end, --break, --note or --travel-minutes");
    }
    let entry = edit::update_entry(store.get(date).cloned(), date, update)?;
    tracing::info!(%date, "edited entry");
    store_and_report(writer, store, entry)
}

/// Deletes the entry of `date`.
pub fn delete<W: Write>(writer: &mut W, store: &mut EntryStore, date: NaiveDate) -> Result<()> {
    let removed = store
        .remove(date)
        .ok_or(ValidationError::MissingEntry { date })?;
    tracing::info!(%date, "deleted entry");

    writeln!(writer, "Deleted {}", describe_entry(&removed))?;
    store
        .save()
        .with_context(|| format!("failed to save {}", store.path().display()))
}
