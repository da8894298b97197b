//! Core type definitions with validation.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Invalid day type value.
    #[error("invalid day type: {value} (expected \"work\" or \"off\")")]
    InvalidDayType { value: String },

    /// A clock time could not be parsed.
    #[error("invalid clock time: {value} (expected HH:MM)")]
    InvalidClockTime { value: String },

    /// A travel distance was negative, too large or not a number.
    #[error("distance must be between 0 and 100000 kilometres, got {value}")]
    InvalidDistance { value: f64 },

    /// An edit required an existing entry for the date.
    #[error("no entry recorded for {date}")]
    MissingEntry { date: NaiveDate },
}

/// Whether a day is a work day or a day off.
///
/// The two variants select which arithmetic applies to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    /// A regular work day; accrues the daily target.
    #[default]
    Work,
    /// A day off; only travel time counts.
    Off,
}

impl DayType {
    /// String representation for storage and display.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DayType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(Self::Work),
            "off" => Ok(Self::Off),
            _ => Err(ValidationError::InvalidDayType {
                value: s.to_string(),
            }),
        }
    }
}

/// Default start of the working day (08:00).
pub const DEFAULT_WORK_START: NaiveTime = clock::hm(8, 0);

/// Default end of the working day (19:00).
pub const DEFAULT_WORK_END: NaiveTime = clock::hm(19, 0);

/// Default break length in minutes.
pub const DEFAULT_BREAK_MINUTES: u32 = 60;

const fn default_work_start() -> NaiveTime {
    DEFAULT_WORK_START
}

const fn default_work_end() -> NaiveTime {
    DEFAULT_WORK_END
}

const fn default_break_minutes() -> u32 {
    DEFAULT_BREAK_MINUTES
}

/// One calendar day of recorded work and travel.
///
/// Calculations only read entries. Edits go through [`crate::edit`], which
/// returns a new entry for the caller to store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    /// The calendar day. Unique within a range.
    pub date: NaiveDate,

    /// Work day or day off.
    #[serde(default)]
    pub day_type: DayType,

    /// Start of work. Only read for [`DayType::Work`].
    #[serde(default = "default_work_start", with = "clock")]
    pub work_start: NaiveTime,

    /// End of work. Only read for [`DayType::Work`].
    #[serde(default = "default_work_end", with = "clock")]
    pub work_end: NaiveTime,

    /// Unpaid break subtracted from the worked span.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,

    /// When the travel leg started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_start_at: Option<DateTime<Utc>>,

    /// When the travel leg arrived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_arrive_at: Option<DateTime<Utc>>,

    /// Explicit paid travel minutes. Takes precedence over the timestamps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_paid_minutes: Option<i64>,

    /// Place the travel leg started from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_label_start: Option<String>,

    /// Place the travel leg arrived at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_label_end: Option<String>,

    /// Whether the user confirmed this day. Unconfirmed days count for nothing.
    #[serde(default)]
    pub confirmed_work_day: bool,

    /// Free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DayEntry {
    /// Creates an unconfirmed work day with the default schedule and no travel.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            day_type: DayType::Work,
            work_start: DEFAULT_WORK_START,
            work_end: DEFAULT_WORK_END,
            break_minutes: DEFAULT_BREAK_MINUTES,
            travel_start_at: None,
            travel_arrive_at: None,
            travel_paid_minutes: None,
            travel_label_start: None,
            travel_label_end: None,
            confirmed_work_day: false,
            note: None,
        }
    }

    /// Returns true if any travel information is recorded.
    pub const fn has_travel(&self) -> bool {
        self.travel_paid_minutes.is_some()
            || self.travel_start_at.is_some()
            || self.travel_arrive_at.is_some()
    }
}
