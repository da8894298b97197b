//! Export command.
//!
//! Writes day entries with their derived minutes to stdout, either as
//! semicolon-separated CSV for spreadsheets or as a JSON document.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use mz_core::format::format_hours;
use mz_core::time_calc::{
    calculate_paid_total_hours, calculate_paid_total_minutes, calculate_travel_minutes,
    calculate_work_hours, calculate_work_minutes,
};
use mz_core::{DayEntry, clock};
use serde::Serialize;

use crate::cli::ExportFormat;

/// Version of the JSON export layout.
pub const EXPORT_VERSION: &str = "1.0";

const CSV_HEADER: &str = "date;dayType;workStart;workEnd;breakMinutes;\
travelStartAt;travelArriveAt;travelLabelStart;travelLabelEnd;\
travelMinutes;workHours;paidHours;confirmed;note";

/// Escapes separators and quotes inside a CSV field.
fn escape_csv(value: Option<&str>) -> String {
    value.map_or_else(String::new, |v| {
        v.replace(';', "\\;")
            .replace('"', "\\\"")
            .replace('\n', " ")
    })
}

fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map_or_else(String::new, |t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Formats entries as CSV with a header row.
pub fn format_csv(entries: &[DayEntry]) -> String {
    let mut rows = Vec::with_capacity(entries.len() + 1);
    rows.push(CSV_HEADER.to_string());

    for entry in entries {
        let fields = [
            entry.date.to_string(),
            entry.day_type.as_str().to_uppercase(),
            clock::format(entry.work_start),
            clock::format(entry.work_end),
            entry.break_minutes.to_string(),
            format_timestamp(entry.travel_start_at),
            format_timestamp(entry.travel_arrive_at),
            escape_csv(entry.travel_label_start.as_deref()),
            escape_csv(entry.travel_label_end.as_deref()),
            calculate_travel_minutes(entry).to_string(),
            format_hours(calculate_work_hours(entry)),
            format_hours(calculate_paid_total_hours(entry)),
            entry.confirmed_work_day.to_string(),
            escape_csv(entry.note.as_deref()),
        ];
        rows.push(fields.join(";"));
    }

    let mut output = rows.join("\n");
    output.push('\n');
    output
}

/// An exported entry with its derived minutes.
#[derive(Debug, Serialize)]
pub struct ExportEntry<'a> {
    #[serde(flatten)]
    pub entry: &'a DayEntry,
    pub work_minutes: i64,
    pub travel_minutes: i64,
    pub paid_minutes: i64,
}

impl<'a> From<&'a DayEntry> for ExportEntry<'a> {
    fn from(entry: &'a DayEntry) -> Self {
        Self {
            entry,
            work_minutes: calculate_work_minutes(entry),
            travel_minutes: calculate_travel_minutes(entry),
            paid_minutes: calculate_paid_total_minutes(entry),
        }
    }
}

/// JSON export document.
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub export_version: &'static str,
    pub exported_at: String,
    pub entry_count: usize,
    pub entries: Vec<ExportEntry<'a>>,
}

/// Formats entries as a pretty-printed JSON document.
pub fn format_json(entries: &[DayEntry], exported_at: DateTime<Utc>) -> Result<String> {
    let doc = ExportDocument {
        export_version: EXPORT_VERSION,
        exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        entry_count: entries.len(),
        entries: entries.iter().map(ExportEntry::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Runs the export command.
pub fn run<W: Write>(
    writer: &mut W,
    entries: &[DayEntry],
    format: ExportFormat,
    exported_at: DateTime<Utc>,
) -> Result<()> {
    tracing::debug!(count = entries.len(), ?format, "exporting entries");
    match format {
        ExportFormat::Csv => write!(writer, "{}", format_csv(entries))?,
        ExportFormat::Json => writeln!(writer, "{}", format_json(entries, exported_at)?)?,
    }
    Ok(())
}
