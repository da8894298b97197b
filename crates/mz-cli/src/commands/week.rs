//! Week command: the seven days of an ISO week with their hours.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use mz_core::format::{format_hours, format_signed_hours};
use mz_core::time_calc::{calculate_paid_total_hours, calculate_travel_hours, calculate_work_hours};
use mz_core::week::{week_days, week_start};
use mz_core::{DayEntry, DayType, RangeResult, compute_range};
use serde::Serialize;

use crate::store::EntryStore;

/// One row of the week view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekDay {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_type: Option<DayType>,
    pub confirmed: bool,
    pub work_hours: f64,
    pub travel_hours: f64,
    pub paid_hours: f64,
}

impl WeekDay {
    fn from_entry(date: NaiveDate, entry: Option<&DayEntry>) -> Self {
        entry.map_or(
            Self {
                date,
                day_type: None,
                confirmed: false,
                work_hours: 0.0,
                travel_hours: 0.0,
                paid_hours: 0.0,
            },
            |e| Self {
                date,
                day_type: Some(e.day_type),
                confirmed: e.confirmed_work_day,
                work_hours: calculate_work_hours(e),
                travel_hours: calculate_travel_hours(e),
                paid_hours: calculate_paid_total_hours(e),
            },
        )
    }
}

/// Week view data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekReport {
    pub week_start: NaiveDate,
    pub days: Vec<WeekDay>,
    pub totals: RangeResult,
}

/// Builds the week containing `date`.
pub fn generate_week(store: &EntryStore, date: NaiveDate, daily_target_hours: f64) -> WeekReport {
    let start = week_start(date);
    let days: Vec<WeekDay> = week_days(start)
        .into_iter()
        .map(|d| WeekDay::from_entry(d, store.get(d)))
        .collect();
    let entries: Vec<DayEntry> = week_days(start)
        .into_iter()
        .filter_map(|d| store.get(d).cloned())
        .collect();

    WeekReport {
        week_start: start,
        days,
        totals: compute_range(&entries, daily_target_hours),
    }
}

/// Formats the human-readable week view.
pub fn format_week(report: &WeekReport) -> String {
    let mut output = String::new();

    writeln!(
        output,
        "WEEK OF {} (KW {})",
        report.week_start.format("%d.%m.%Y"),
        report.week_start.format("%V")
    )
    .unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Day         Type  OK   Work  Travel    Paid").unwrap();

    for day in &report.days {
        let label = day.date.format("%a %d.%m.");
        let Some(day_type) = day.day_type else {
            writeln!(output, "{label}  -").unwrap();
            continue;
        };
        let ok = if day.confirmed { "✓" } else { " " };
        writeln!(
            output,
            "{label}  {:<4}  {ok}  {:>6}  {:>6}  {:>6}",
            day_type.as_str(),
            format_hours(day.work_hours),
            format_hours(day.travel_hours),
            format_hours(day.paid_hours),
        )
        .unwrap();
    }

    let t = &report.totals;
    writeln!(output).unwrap();
    writeln!(
        output,
        "Target {} h, actual {} h, overtime {} h",
        format_hours(t.total_target_hours),
        format_hours(t.total_actual_hours),
        format_signed_hours(t.total_overtime_hours)
    )
    .unwrap();

    output
}

/// Runs the week command.
pub fn run<W: Write>(
    writer: &mut W,
    store: &EntryStore,
    date: NaiveDate,
    daily_target_hours: f64,
    json: bool,
) -> Result<()> {
    let report = generate_week(store, date, daily_target_hours);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write!(writer, "{}", format_week(&report))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use mz_core::clock::hm;

    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    fn sample_store() -> (tempfile::TempDir, EntryStore) {
        let temp = tempfile::tempdir().unwrap();
        let mut store = EntryStore::open(&temp.path().join("entries.json")).unwrap();
        store.upsert(DayEntry {
            work_start: hm(8, 0),
            work_end: hm(18, 0),
            break_minutes: 60,
            confirmed_work_day: true,
            ..DayEntry::new(date(12))
        });
        store.upsert(DayEntry {
            work_start: hm(8, 0),
            work_end: hm(16, 0),
            break_minutes: 60,
            travel_paid_minutes: Some(30),
            ..DayEntry::new(date(13))
        });
        store.upsert(DayEntry {
            day_type: DayType::Off,
            travel_paid_minutes: Some(120),
            confirmed_work_day: true,
            ..DayEntry::new(date(18))
        });
        // next week, excluded
        store.upsert(DayEntry {
            confirmed_work_day: true,
            ..DayEntry::new(date(19))
        });
        (temp, store)
    }

    #[test]
    fn week_has_seven_days_and_totals() {
        let (_temp, store) = sample_store();
        let report = generate_week(&store, date(15), 8.0);

        assert_eq!(report.week_start, date(12));
        assert_eq!(report.days.len(), 7);
        assert_eq!(report.days[2].day_type, None);
        // the unconfirmed 13th shows hours but does not count
        assert!((report.days[1].paid_hours - 7.5).abs() < 1e-9);
        assert_eq!(report.totals.counted_days, 1);
        assert!((report.totals.total_actual_hours - 11.0).abs() < 1e-9);
        assert!((report.totals.total_overtime_hours - 3.0).abs() < 1e-9);
    }

    #[test]
    fn format_week_view() {
        let (_temp, store) = sample_store();
        let report = generate_week(&store, date(15), 8.0);

        assert_snapshot!(format_week(&report).trim_end(), @r"
        WEEK OF 12.01.2026 (KW 03)

        Day         Type  OK   Work  Travel    Paid
        Mon 12.01.  work  ✓    9,00    0,00    9,00
        Tue 13.01.  work       7,00    0,50    7,50
        Wed 14.01.  -
        Thu 15.01.  -
        Fri 16.01.  -
        Sat 17.01.  -
        Sun 18.01.  off   ✓    0,00    2,00    2,00

        Target 8,00 h, actual 11,00 h, overtime +3,00 h
        ");
    }
}
