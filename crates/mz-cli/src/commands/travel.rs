//! Travel recording and distance-based compensation.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, Utc};
use mz_core::format::format_minutes_as_hours;
use mz_core::time_calc::calculate_travel_minutes;
use mz_core::{DayEntry, TravelEvent, edit, travel_compensation};

use crate::store::EntryStore;

fn save(store: &EntryStore) -> Result<()> {
    store
        .save()
        .with_context(|| format!("failed to save {}", store.path().display()))
}

fn travel_summary(entry: &DayEntry) -> String {
    let minutes = calculate_travel_minutes(entry);
    let from = entry.travel_label_start.as_deref().unwrap_or("?");
    let to = entry.travel_label_end.as_deref().unwrap_or("?");
    let stamp = |t: Option<DateTime<Utc>>| {
        t.map_or_else(
            || "--:--".to_string(),
            |t| t.with_timezone(&Local).format("%H:%M").to_string(),
        )
    };
    format!(
        "{}: travel {from} {} -> {to} {}, {} h paid",
        entry.date,
        stamp(entry.travel_start_at),
        stamp(entry.travel_arrive_at),
        format_minutes_as_hours(minutes),
    )
}

/// Records a travel event on `date`.
pub fn record<W: Write>(
    writer: &mut W,
    store: &mut EntryStore,
    date: NaiveDate,
    event: TravelEvent,
    at: DateTime<Utc>,
    label: Option<String>,
) -> Result<()> {
    let entry = edit::set_travel_event(store.get(date).cloned(), date, event, at, label);
    tracing::info!(%date, %event, %at, "recorded travel event");

    writeln!(writer, "{}", travel_summary(&entry))?;
    store.upsert(entry);
    save(store)
}

/// Removes all travel from `date`.
pub fn clear<W: Write>(writer: &mut W, store: &mut EntryStore, date: NaiveDate) -> Result<()> {
    let entry = edit::clear_travel(store.get(date).cloned(), date)?;
    tracing::info!(%date, "cleared travel");

    writeln!(writer, "{date}: travel cleared")?;
    store.upsert(entry);
    save(store)
}

/// Prints paid travel for `distance_km` and optionally stores it on `date`.
pub fn compensation<W: Write>(
    writer: &mut W,
    store: &mut EntryStore,
    distance_km: f64,
    rounding_step_minutes: u32,
    date: Option<NaiveDate>,
) -> Result<()> {
    let result = travel_compensation(distance_km, rounding_step_minutes)?;
    writeln!(
        writer,
        "{distance_km} km -> {} min ({})",
        result.paid_minutes, result.paid_hours_display
    )?;

    if let Some(date) = date {
        let entry = store
            .get(date)
            .cloned()
            .unwrap_or_else(|| DayEntry::new(date));
        store.upsert(DayEntry {
            travel_paid_minutes: Some(result.paid_minutes),
            ..entry
        });
        save(store)?;
        writeln!(writer, "Stored as paid travel for {date}")?;
    }

    Ok(())
}
