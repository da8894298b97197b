//! The configured working day and the daily target derived from it.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::clock::{self, minute_of_day};
use crate::types::{DEFAULT_BREAK_MINUTES, DEFAULT_WORK_END, DEFAULT_WORK_START};

/// Standard start, end and break of a working day.
///
/// New work days are created with these times, and the daily target for
/// overtime is derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    #[serde(with = "clock")]
    pub work_start: NaiveTime,
    #[serde(with = "clock")]
    pub work_end: NaiveTime,
    pub break_minutes: i64,
}

impl Default for WorkSchedule {
    fn default() -> Self {
        Self {
            work_start: DEFAULT_WORK_START,
            work_end: DEFAULT_WORK_END,
            break_minutes: i64::from(DEFAULT_BREAK_MINUTES),
        }
    }
}

impl WorkSchedule {
    /// Target hours for one work day: `(end - start - break) / 60`.
    ///
    /// Returns 0.0 when the end is not after the start or when the break
    /// swallows the whole span. A negative break counts as no break.
    #[allow(clippy::cast_precision_loss)]
    pub fn daily_target_hours(&self) -> f64 {
        let span = minute_of_day(self.work_end) - minute_of_day(self.work_start);
        if span <= 0 {
            return 0.0;
        }

        let target = span - self.break_minutes.max(0);
        if target <= 0 {
            return 0.0;
        }

        target as f64 / 60.0
    }

    /// Break minutes as stored on a day entry.
    pub fn entry_break_minutes(&self) -> u32 {
        u32::try_from(self.break_minutes.max(0)).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::hm;

    fn schedule(start: NaiveTime, end: NaiveTime, break_minutes: i64) -> WorkSchedule {
        WorkSchedule {
            work_start: start,
            work_end: end,
            break_minutes,
        }
    }

    #[test]
    #[expect(
        clippy::float_cmp,
        reason = "exact equality intended for whole and half hours"
    )]
    fn default_schedule_targets_ten_hours() {
        assert_eq!(WorkSchedule::default().daily_target_hours(), 10.0);
        assert_eq!(schedule(hm(8, 0), hm(16, 30), 30).daily_target_hours(), 8.0);
        assert_eq!(schedule(hm(7, 0), hm(15, 0), 30).daily_target_hours(), 7.5);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "exact zero expected")]
    fn inverted_or_empty_span_targets_zero() {
        assert_eq!(schedule(hm(18, 0), hm(8, 0), 60).daily_target_hours(), 0.0);
        assert_eq!(schedule(hm(8, 0), hm(8, 0), 0).daily_target_hours(), 0.0);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "exact values expected")]
    fn break_handling() {
        assert_eq!(schedule(hm(8, 0), hm(9, 0), 60).daily_target_hours(), 0.0);
        assert_eq!(schedule(hm(8, 0), hm(9, 0), 120).daily_target_hours(), 0.0);
        assert_eq!(schedule(hm(8, 0), hm(12, 0), -30).daily_target_hours(), 4.0);
    }

    #[test]
    fn entry_break_minutes_clamps_negative() {
        assert_eq!(schedule(hm(8, 0), hm(17, 0), -5).entry_break_minutes(), 0);
        assert_eq!(WorkSchedule::default().entry_break_minutes(), 60);
    }
}
