//! Shared utilities for CLI commands.

use std::sync::LazyLock;

use anyhow::Context;
use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use regex::Regex;

/// Pre-compiled regex for relative date parsing.
static RELATIVE_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(day|week)s?\s+ago$").unwrap());

/// Conservative bound for relative dates (~100 years in days).
const MAX_RELATIVE_DAYS: i64 = 100 * 366;

/// Parse a date string relative to `today`.
///
/// Supports:
/// - ISO 8601: "2026-01-15"
/// - Keywords: "today", "yesterday"
/// - Relative: "3 days ago", "1 week ago"
pub fn parse_date(s: &str, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    match s {
        "today" => return Ok(today),
        "yesterday" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    let Some(caps) = RELATIVE_DATE_RE.captures(s) else {
        anyhow::bail!(
            "Invalid date: {s}. Use YYYY-MM-DD, 'today', 'yesterday' or relative (e.g., '3 days ago')"
        );
    };

    let n: i64 = caps[1]
        .parse()
        .context("failed to parse number in relative date")?;

    let days_per_unit = match &caps[2] {
        "day" => 1,
        "week" => 7,
        unit => anyhow::bail!("Unknown date unit: {unit}"),
    };

    if n > MAX_RELATIVE_DAYS / days_per_unit {
        anyhow::bail!("Relative date too far back: {n} {}s", &caps[2]);
    }

    Ok(today - Duration::days(n * days_per_unit))
}

/// Resolve an optional `--date` argument, defaulting to `today`.
pub fn date_or_today(arg: Option<&str>, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    arg.map_or(Ok(today), |s| parse_date(s, today))
}

/// Parse the time of a travel event on `date`.
///
/// Accepts a full RFC 3339 timestamp or a local `HH:MM` on `date`. A local
/// time skipped by a DST change is rejected; an ambiguous one takes the
/// earlier instant.
pub fn parse_event_time(s: &str, date: NaiveDate) -> anyhow::Result<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let time = mz_core::clock::parse(s)
        .with_context(|| format!("Invalid time: {s}. Use HH:MM or RFC 3339"))?;
    let local = Local
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .with_context(|| format!("{date} {s} does not exist in the local timezone"))?;
    Ok(local.with_timezone(&Utc))
}
