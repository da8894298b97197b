//! Clock times of day in `HH:MM` form.
//!
//! Work start/end are wall-clock values without a date. They are stored and
//! configured as `"08:00"`; seconds are accepted on input and ignored by all
//! minute arithmetic.
//!
//! The module doubles as a serde adapter: `#[serde(with = "clock")]`.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

use crate::types::ValidationError;

/// Builds a clock time from hour and minute.
///
/// Panics at compile time when used in a const with an out-of-range value.
#[must_use]
pub const fn hm(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(t) => t,
        None => panic!("clock time out of range"),
    }
}

/// Parses `HH:MM` (or `HH:MM:SS`).
pub fn parse(s: &str) -> Result<NaiveTime, ValidationError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidClockTime {
            value: s.to_string(),
        })
}

/// Formats a clock time as `HH:MM`.
pub fn format(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Minutes since midnight, ignoring seconds.
pub fn minute_of_day(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

pub fn serialize<S>(t: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(*t))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hours_and_minutes() {
        assert_eq!(parse("08:00").unwrap(), hm(8, 0));
        assert_eq!(parse(" 17:45 ").unwrap(), hm(17, 45));
    }

    #[test]
    fn parses_with_seconds() {
        assert_eq!(
            parse("07:30:15").unwrap(),
            NaiveTime::from_hms_opt(7, 30, 15).unwrap()
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("25:00").is_err());
        assert!(parse("8am").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn minute_of_day_ignores_seconds() {
        assert_eq!(minute_of_day(hm(0, 0)), 0);
        assert_eq!(minute_of_day(hm(8, 30)), 510);
        assert_eq!(
            minute_of_day(NaiveTime::from_hms_opt(23, 59, 59).unwrap()),
            1439
        );
    }

    #[test]
    fn format_pads() {
        assert_eq!(format(hm(7, 5)), "07:05");
    }
}
