//! Distance-based travel compensation.
//!
//! Paid travel is derived from the driven distance at a flat 100 km per hour.
//! The result is what callers store in `DayEntry::travel_paid_minutes`.

use serde::Serialize;

use crate::format::format_minutes_as_hours;
use crate::types::ValidationError;

/// Kilometres paid as one hour of travel.
pub const KM_PER_PAID_HOUR: f64 = 100.0;

/// Longest distance accepted for compensation.
pub const MAX_DISTANCE_KM: f64 = 100_000.0;

/// Paid travel for a distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TravelCompensation {
    /// Paid minutes after rounding.
    pub paid_minutes: i64,
    /// Paid time for display, e.g. `"1,50 h"`.
    pub paid_hours_display: String,
}

/// Computes paid travel minutes for `distance_km`.
///
/// With a positive `rounding_step_minutes` the raw minutes are rounded up to
/// the next multiple of the step; otherwise fractional minutes are dropped.
#[allow(clippy::cast_possible_truncation)]
pub fn travel_compensation(
    distance_km: f64,
    rounding_step_minutes: u32,
) -> Result<TravelCompensation, ValidationError> {
    if !distance_km.is_finite() || !(0.0..=MAX_DISTANCE_KM).contains(&distance_km) {
        return Err(ValidationError::InvalidDistance { value: distance_km });
    }

    let raw_minutes = distance_km / KM_PER_PAID_HOUR * 60.0;
    let rounded = if rounding_step_minutes > 0 {
        let step = f64::from(rounding_step_minutes);
        (raw_minutes / step).ceil() * step
    } else {
        raw_minutes
    };

    let paid_minutes = rounded as i64;
    Ok(TravelCompensation {
        paid_minutes,
        paid_hours_display: format!("{} h", format_minutes_as_hours(paid_minutes)),
    })
}
