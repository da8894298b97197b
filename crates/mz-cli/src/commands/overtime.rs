//! Overtime command.
//!
//! Implements `mz overtime` with period options (--week, --last-week,
//! --month, --last-month, --range) and output formats (human-readable, JSON).

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate};
use mz_core::format::{format_hours, format_signed_hours};
use mz_core::week::week_start;
use mz_core::{RangeResult, compute_range};
use serde::Serialize;

use super::util::parse_date;
use crate::cli::PeriodArgs;
use crate::store::EntryStore;

/// Report period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Week,
    LastWeek,
    Month,
    LastMonth,
    Range { start: NaiveDate, end: NaiveDate },
}

impl Period {
    /// Resolves the CLI flags; the current week when none is given.
    pub fn from_args(args: &PeriodArgs, today: NaiveDate) -> Result<Self> {
        if let Some(range) = &args.range {
            let (start, end) = range
                .split_once("..")
                .with_context(|| format!("Invalid range: {range}. Use FROM..TO"))?;
            let start = parse_date(start, today)?;
            let end = parse_date(end, today)?;
            if end < start {
                anyhow::bail!("Invalid range: {start} is after {end}");
            }
            return Ok(Self::Range { start, end });
        }

        Ok(if args.last_week {
            Self::LastWeek
        } else if args.month {
            Self::Month
        } else if args.last_month {
            Self::LastMonth
        } else {
            Self::Week
        })
    }

    /// First and last day of the period, both inclusive.
    pub fn boundaries(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Self::Week => {
                let monday = week_start(today);
                (monday, monday + Duration::days(6))
            }
            Self::LastWeek => {
                let monday = week_start(today) - Duration::days(7);
                (monday, monday + Duration::days(6))
            }
            Self::Month => month_boundaries(today),
            Self::LastMonth => {
                let (first, _) = month_boundaries(today);
                month_boundaries(first - Duration::days(1))
            }
            Self::Range { start, end } => (start, end),
        }
    }
}

/// First and last day of the month containing `date`.
fn month_boundaries(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date - Duration::days(i64::from(date.day0()));
    let next_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
    .unwrap_or(first);
    (first, next_first - Duration::days(1))
}

/// Computed overtime data for a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OvertimeReport {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub daily_target_hours: f64,
    pub entries: usize,
    #[serde(flatten)]
    pub result: RangeResult,
}

/// Loads the period's entries and folds them against the daily target.
pub fn generate_report(
    store: &EntryStore,
    period: Period,
    today: NaiveDate,
    daily_target_hours: f64,
) -> OvertimeReport {
    let (period_start, period_end) = period.boundaries(today);
    let entries = store.range(period_start, period_end);
    let result = compute_range(&entries, daily_target_hours);

    OvertimeReport {
        period_start,
        period_end,
        daily_target_hours,
        entries: entries.len(),
        result,
    }
}

/// Formats the human-readable report.
pub fn format_report(report: &OvertimeReport) -> String {
    let mut output = String::new();
    let r = &report.result;

    writeln!(
        output,
        "OVERTIME: {} - {}",
        report.period_start.format("%d.%m.%Y"),
        report.period_end.format("%d.%m.%Y")
    )
    .unwrap();
    writeln!(output, "──────────────────────────────").unwrap();

    if r.counted_days == 0 && r.off_day_travel_days == 0 {
        writeln!(output, "No confirmed days in this period.").unwrap();
        return output;
    }

    writeln!(output, "Work days:        {:>8}", r.counted_days).unwrap();
    writeln!(
        output,
        "Target:           {:>8} h  ({} h/day)",
        format_hours(r.total_target_hours),
        format_hours(report.daily_target_hours)
    )
    .unwrap();
    writeln!(output, "Actual:           {:>8} h", format_hours(r.total_actual_hours)).unwrap();
    if r.off_day_travel_days > 0 {
        writeln!(
            output,
            "  Off-day travel: {:>8} h  ({} days)",
            format_hours(r.off_day_travel_hours),
            r.off_day_travel_days
        )
        .unwrap();
    }
    writeln!(
        output,
        "Overtime:         {:>8} h",
        format_signed_hours(r.total_overtime_hours)
    )
    .unwrap();

    output
}

/// Runs the overtime command.
pub fn run<W: Write>(
    writer: &mut W,
    store: &EntryStore,
    period: Period,
    today: NaiveDate,
    daily_target_hours: f64,
    json: bool,
) -> Result<()> {
    let report = generate_report(store, period, today, daily_target_hours);
    tracing::debug!(?report, "generated overtime report");

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write!(writer, "{}", format_report(&report))?;
    }
    Ok(())
}
