//! Overtime over a range of day entries.
//!
//! Folds confirmed day entries into actual vs. target hours for a range.
//!
//! # Algorithm Summary
//!
//! 1. Unconfirmed entries are skipped entirely.
//! 2. Work days count towards `counted_days`, accrue the daily target and add
//!    their paid total (work + travel) to the actual hours.
//! 3. Days off with travel add the travel hours to the actual hours and to the
//!    off-day travel totals. They accrue no target, so the travel flows
//!    straight into overtime.
//! 4. Overtime is actual minus target, and may be negative.
//!
//! The fold is a sum, so entry order does not affect the result.

use serde::Serialize;

use crate::time_calc::{calculate_paid_total_hours, calculate_travel_hours};
use crate::types::{DayEntry, DayType};

/// Totals for a range of day entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RangeResult {
    /// Paid hours of confirmed work days plus off-day travel hours.
    pub total_actual_hours: f64,

    /// Daily target times the number of confirmed work days.
    pub total_target_hours: f64,

    /// Actual minus target. Negative means undertime.
    pub total_overtime_hours: f64,

    /// Confirmed work days.
    pub counted_days: u32,

    /// Travel hours recorded on confirmed days off.
    pub off_day_travel_hours: f64,

    /// Confirmed days off with non-zero travel.
    pub off_day_travel_days: u32,
}

/// Computes range totals against a fixed daily target.
///
/// The target is an explicit input; it is not validated, so a negative target
/// is summed as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeAggregator {
    daily_target_hours: f64,
}

impl RangeAggregator {
    pub const fn new(daily_target_hours: f64) -> Self {
        Self { daily_target_hours }
    }

    pub const fn daily_target_hours(&self) -> f64 {
        self.daily_target_hours
    }

    /// Folds `entries` into a [`RangeResult`].
    pub fn compute(&self, entries: &[DayEntry]) -> RangeResult {
        let mut result = RangeResult::default();

        for entry in entries.iter().filter(|e| e.confirmed_work_day) {
            match entry.day_type {
                DayType::Work => {
                    result.counted_days += 1;
                    result.total_target_hours += self.daily_target_hours;
                    result.total_actual_hours += calculate_paid_total_hours(entry);
                }
                DayType::Off => {
                    let travel_hours = calculate_travel_hours(entry);
                    if travel_hours > 0.0 {
                        result.total_actual_hours += travel_hours;
                        result.off_day_travel_hours += travel_hours;
                        result.off_day_travel_days += 1;
                    }
                }
            }
        }

        result.total_overtime_hours = result.total_actual_hours - result.total_target_hours;

        tracing::debug!(
            entries = entries.len(),
            counted_days = result.counted_days,
            actual = result.total_actual_hours,
            target = result.total_target_hours,
            overtime = result.total_overtime_hours,
            "computed range totals"
        );

        result
    }
}

/// Computes range totals for `entries` against `daily_target_hours`.
///
/// Shorthand for `RangeAggregator::new(daily_target_hours).compute(entries)`.
pub fn compute_range(entries: &[DayEntry], daily_target_hours: f64) -> RangeResult {
    RangeAggregator::new(daily_target_hours).compute(entries)
}
