//! Per-entry time arithmetic.
//!
//! Converts the raw clock fields of one [`DayEntry`] into worked, travel and
//! paid minutes. Minute values are integers; hour values are the minutes
//! divided by 60 with no rounding. Display rounding belongs to
//! [`crate::format`].

use crate::clock::minute_of_day;
use crate::types::{DayEntry, DayType};

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_DAY: i64 = 24 * 60 * MS_PER_MINUTE;

/// Net worked minutes: `(end - start) - break`.
///
/// Returns 0 for days off. An end before the start counts as an empty span,
/// and a break longer than the span yields 0 rather than a negative value.
pub fn calculate_work_minutes(entry: &DayEntry) -> i64 {
    if entry.day_type == DayType::Off {
        return 0;
    }

    let span = (minute_of_day(entry.work_end) - minute_of_day(entry.work_start)).max(0);
    (span - i64::from(entry.break_minutes)).max(0)
}

/// Paid travel minutes.
///
/// Precedence:
/// 1. `travel_paid_minutes`, when set, returned as stored;
/// 2. the span between `travel_start_at` and `travel_arrive_at`, when both are
///    set. Both stamps carry the entry's date, so an arrival before the start
///    crossed midnight and gets 24 hours added;
/// 3. otherwise 0.
pub fn calculate_travel_minutes(entry: &DayEntry) -> i64 {
    if let Some(paid) = entry.travel_paid_minutes {
        return paid;
    }
    let (Some(start), Some(arrive)) = (entry.travel_start_at, entry.travel_arrive_at) else {
        return 0;
    };

    let mut diff_ms = (arrive - start).num_milliseconds();
    if diff_ms < 0 {
        diff_ms += MS_PER_DAY;
    }
    (diff_ms / MS_PER_MINUTE).max(0)
}

/// Worked plus travel minutes, saturating at the `i64` bounds.
pub fn calculate_paid_total_minutes(entry: &DayEntry) -> i64 {
    calculate_work_minutes(entry).saturating_add(calculate_travel_minutes(entry))
}

#[allow(clippy::cast_precision_loss)]
fn minutes_to_hours(minutes: i64) -> f64 {
    minutes as f64 / 60.0
}

/// Net worked hours.
pub fn calculate_work_hours(entry: &DayEntry) -> f64 {
    minutes_to_hours(calculate_work_minutes(entry))
}

/// Paid travel hours.
pub fn calculate_travel_hours(entry: &DayEntry) -> f64 {
    minutes_to_hours(calculate_travel_minutes(entry))
}

/// Worked plus travel hours.
pub fn calculate_paid_total_hours(entry: &DayEntry) -> f64 {
    minutes_to_hours(calculate_paid_total_minutes(entry))
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

    use super::*;
    use crate::clock::hm;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    fn at(time: NaiveTime) -> DateTime<Utc> {
        Utc.from_utc_datetime(&day().and_time(time))
    }

    fn work(start: NaiveTime, end: NaiveTime, break_minutes: u32) -> DayEntry {
        DayEntry {
            work_start: start,
            work_end: end,
            break_minutes,
            ..DayEntry::new(day())
        }
    }

    fn with_travel(start: NaiveTime, arrive: NaiveTime) -> DayEntry {
        DayEntry {
            travel_start_at: Some(at(start)),
            travel_arrive_at: Some(at(arrive)),
            ..DayEntry::new(day())
        }
    }

    #[test]
    fn work_minutes_subtract_break() {
        assert_eq!(calculate_work_minutes(&work(hm(8, 0), hm(18, 0), 60)), 540);
        assert_eq!(calculate_work_minutes(&work(hm(7, 30), hm(16, 15), 45)), 480);
    }

    #[test]
    fn work_minutes_zero_on_day_off() {
        let entry = DayEntry {
            day_type: DayType::Off,
            ..work(hm(8, 0), hm(18, 0), 0)
        };
        assert_eq!(calculate_work_minutes(&entry), 0);
    }

    #[test]
    fn work_minutes_clamp_end_before_start() {
        assert_eq!(calculate_work_minutes(&work(hm(18, 0), hm(8, 0), 0)), 0);
        assert_eq!(calculate_work_minutes(&work(hm(18, 0), hm(8, 0), 60)), 0);
    }

    #[test]
    fn work_minutes_clamp_break_longer_than_span() {
        assert_eq!(calculate_work_minutes(&work(hm(8, 0), hm(9, 0), 90)), 0);
    }

    #[test]
    fn travel_within_day() {
        let entry = with_travel(hm(8, 0), hm(17, 0));
        assert_eq!(calculate_travel_minutes(&entry), 540);
    }

    #[test]
    fn travel_crossing_midnight() {
        assert_eq!(calculate_travel_minutes(&with_travel(hm(23, 0), hm(1, 0))), 120);
        assert_eq!(calculate_travel_minutes(&with_travel(hm(23, 50), hm(0, 10))), 20);
    }

    #[test]
    fn travel_override_wins_over_timestamps() {
        let entry = DayEntry {
            travel_paid_minutes: Some(999),
            ..with_travel(hm(8, 0), hm(9, 0))
        };
        assert_eq!(calculate_travel_minutes(&entry), 999);
    }

    #[test]
    fn travel_negative_override_is_returned_as_stored() {
        let entry = DayEntry {
            travel_paid_minutes: Some(-60),
            ..work(hm(8, 0), hm(17, 0), 60)
        };
        assert_eq!(calculate_travel_minutes(&entry), -60);
        assert_eq!(calculate_paid_total_minutes(&entry), 420);
    }

    #[test]
    fn paid_total_saturates_on_huge_override() {
        let entry = DayEntry {
            travel_paid_minutes: Some(i64::MAX),
            ..work(hm(8, 0), hm(17, 0), 60)
        };
        assert_eq!(calculate_paid_total_minutes(&entry), i64::MAX);

        let entry = DayEntry {
            travel_paid_minutes: Some(i64::MIN),
            ..work(hm(8, 0), hm(17, 0), 60)
        };
        assert_eq!(calculate_paid_total_minutes(&entry), i64::MIN + 480);
    }

    #[test]
    fn travel_needs_both_timestamps() {
        let entry = DayEntry {
            travel_start_at: Some(at(hm(8, 0))),
            ..DayEntry::new(day())
        };
        assert_eq!(calculate_travel_minutes(&entry), 0);
        assert_eq!(calculate_travel_minutes(&DayEntry::new(day())), 0);
    }

    #[test]
    fn travel_truncates_partial_minutes() {
        let entry = DayEntry {
            travel_start_at: Some(at(hm(8, 0))),
            travel_arrive_at: Some(at(NaiveTime::from_hms_opt(8, 30, 59).unwrap())),
            ..DayEntry::new(day())
        };
        assert_eq!(calculate_travel_minutes(&entry), 30);
    }

    #[test]
    fn paid_total_adds_work_and_travel() {
        let entry = DayEntry {
            travel_paid_minutes: Some(90),
            ..work(hm(8, 0), hm(17, 0), 60)
        };
        assert_eq!(calculate_paid_total_minutes(&entry), 570);
        assert!((calculate_paid_total_hours(&entry) - 9.5).abs() < 1e-9);
        assert!((calculate_work_hours(&entry) - 8.0).abs() < 1e-9);
        assert!((calculate_travel_hours(&entry) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn paid_total_on_day_off_is_travel_only() {
        let entry = DayEntry {
            day_type: DayType::Off,
            travel_paid_minutes: Some(120),
            ..work(hm(8, 0), hm(18, 0), 60)
        };
        assert_eq!(calculate_paid_total_minutes(&entry), 120);
    }
}
