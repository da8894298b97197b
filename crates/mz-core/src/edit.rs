//! Day-entry edits.
//!
//! Each edit takes the stored entry for a date (if any) and returns the entry
//! to store. Reading and writing entries is left to the caller.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schedule::WorkSchedule;
use crate::types::{DayEntry, DayType, ValidationError};

/// A recorded point of a travel leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelEvent {
    /// Leaving for the site.
    Start,
    /// Arriving at the destination.
    Arrive,
    /// Leaving the site for home. Recorded as the start of the leg.
    Departure,
}

impl TravelEvent {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Arrive => "arrive",
            Self::Departure => "departure",
        }
    }
}

impl fmt::Display for TravelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Confirms `date` as a work day.
///
/// The schedule's start, end and break are written onto the entry, replacing
/// any times recorded before. Travel and notes are kept.
pub fn confirm_work_day(
    existing: Option<DayEntry>,
    date: NaiveDate,
    schedule: &WorkSchedule,
) -> DayEntry {
    DayEntry {
        day_type: DayType::Work,
        work_start: schedule.work_start,
        work_end: schedule.work_end,
        break_minutes: schedule.entry_break_minutes(),
        confirmed_work_day: true,
        ..existing.unwrap_or_else(|| DayEntry::new(date))
    }
}

/// Confirms `date` as a day off.
///
/// Any recorded travel is dropped and paid travel is pinned to zero.
pub fn confirm_off_day(existing: Option<DayEntry>, date: NaiveDate) -> DayEntry {
    let entry = clear_travel_fields(existing.unwrap_or_else(|| DayEntry::new(date)));

    DayEntry {
        day_type: DayType::Off,
        confirmed_work_day: true,
        travel_paid_minutes: Some(0),
        ..entry
    }
}

/// Changes the day type only. Confirmation is left untouched.
pub fn set_day_type(existing: Option<DayEntry>, date: NaiveDate, day_type: DayType) -> DayEntry {
    DayEntry {
        day_type,
        ..existing.unwrap_or_else(|| DayEntry::new(date))
    }
}

/// Records a travel event at `timestamp` with an optional place label.
pub fn set_travel_event(
    existing: Option<DayEntry>,
    date: NaiveDate,
    event: TravelEvent,
    timestamp: DateTime<Utc>,
    label: Option<String>,
) -> DayEntry {
    let entry = existing.unwrap_or_else(|| DayEntry::new(date));

    match event {
        TravelEvent::Start | TravelEvent::Departure => DayEntry {
            travel_start_at: Some(timestamp),
            travel_label_start: label,
            ..entry
        },
        TravelEvent::Arrive => DayEntry {
            travel_arrive_at: Some(timestamp),
            travel_label_end: label,
            ..entry
        },
    }
}

/// Removes the travel stamps and labels from an existing entry.
///
/// Paid travel minutes stay, so a stored distance compensation survives.
pub fn clear_travel(existing: Option<DayEntry>, date: NaiveDate) -> Result<DayEntry, ValidationError> {
    existing
        .map(clear_travel_fields)
        .ok_or(ValidationError::MissingEntry { date })
}

fn clear_travel_fields(entry: DayEntry) -> DayEntry {
    DayEntry {
        travel_start_at: None,
        travel_arrive_at: None,
        travel_label_start: None,
        travel_label_end: None,
        ..entry
    }
}

/// Field changes for [`update_entry`]. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    pub work_start: Option<NaiveTime>,
    pub work_end: Option<NaiveTime>,
    pub break_minutes: Option<u32>,
    /// An empty note removes the stored one.
    pub note: Option<String>,
    pub travel_paid_minutes: Option<i64>,
}

impl EntryUpdate {
    /// Returns true if the update changes nothing.
    pub const fn is_empty(&self) -> bool {
        self.work_start.is_none()
            && self.work_end.is_none()
            && self.break_minutes.is_none()
            && self.note.is_none()
            && self.travel_paid_minutes.is_none()
    }
}

/// Applies `update` to an existing entry.
///
/// Day type and confirmation are left untouched.
pub fn update_entry(
    existing: Option<DayEntry>,
    date: NaiveDate,
    update: EntryUpdate,
) -> Result<DayEntry, ValidationError> {
    let entry = existing.ok_or(ValidationError::MissingEntry { date })?;

    Ok(DayEntry {
        work_start: update.work_start.unwrap_or(entry.work_start),
        work_end: update.work_end.unwrap_or(entry.work_end),
        break_minutes: update.break_minutes.unwrap_or(entry.break_minutes),
        travel_paid_minutes: update.travel_paid_minutes.or(entry.travel_paid_minutes),
        note: match update.note {
            Some(note) if note.trim().is_empty() => None,
            Some(note) => Some(note),
            None => entry.note,
        },
        ..entry
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::clock::hm;
    use crate::time_calc::{calculate_travel_minutes, calculate_work_minutes};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()
    }

    fn ts(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.from_utc_datetime(&date().and_time(hm(hour, minute)))
    }

    fn custom_schedule() -> WorkSchedule {
        WorkSchedule {
            work_start: hm(7, 0),
            work_end: hm(16, 0),
            break_minutes: 30,
        }
    }

    #[test]
    fn confirm_work_day_creates_entry_from_schedule() {
        let entry = confirm_work_day(None, date(), &custom_schedule());

        assert_eq!(entry.date, date());
        assert_eq!(entry.day_type, DayType::Work);
        assert!(entry.confirmed_work_day);
        assert_eq!(entry.work_start, hm(7, 0));
        assert_eq!(entry.work_end, hm(16, 0));
        assert_eq!(entry.break_minutes, 30);
    }

    #[test]
    fn confirm_work_day_applies_schedule_to_existing_entry() {
        let existing = DayEntry {
            day_type: DayType::Off,
            work_start: hm(9, 0),
            work_end: hm(17, 0),
            break_minutes: 30,
            travel_paid_minutes: Some(45),
            note: Some("Baustelle Nord".into()),
            ..DayEntry::new(date())
        };
        let entry = confirm_work_day(Some(existing), date(), &WorkSchedule::default());

        assert_eq!(entry.day_type, DayType::Work);
        assert!(entry.confirmed_work_day);
        assert_eq!(entry.work_start, hm(8, 0));
        assert_eq!(entry.work_end, hm(19, 0));
        assert_eq!(entry.break_minutes, 60);
        assert_eq!(entry.travel_paid_minutes, Some(45));
        assert_eq!(entry.note.as_deref(), Some("Baustelle Nord"));
    }

    #[test]
    fn confirm_off_day_clears_travel() {
        let existing = DayEntry {
            travel_start_at: Some(ts(6, 0)),
            travel_arrive_at: Some(ts(8, 0)),
            travel_label_start: Some("Leipzig".into()),
            travel_label_end: Some("Dresden".into()),
            note: Some("kept".into()),
            ..DayEntry::new(date())
        };
        let entry = confirm_off_day(Some(existing), date());

        assert_eq!(entry.day_type, DayType::Off);
        assert!(entry.confirmed_work_day);
        assert_eq!(entry.travel_start_at, None);
        assert_eq!(entry.travel_arrive_at, None);
        assert_eq!(entry.travel_label_start, None);
        assert_eq!(entry.travel_paid_minutes, Some(0));
        assert_eq!(entry.note.as_deref(), Some("kept"));
        assert_eq!(calculate_travel_minutes(&entry), 0);
    }

    #[test]
    fn confirm_off_day_creates_entry() {
        let entry = confirm_off_day(None, date());
        assert_eq!(entry.date, date());
        assert_eq!(entry.day_type, DayType::Off);
        assert!(entry.confirmed_work_day);
    }

    #[test]
    fn set_day_type_leaves_confirmation() {
        let entry = set_day_type(None, date(), DayType::Off);
        assert_eq!(entry.day_type, DayType::Off);
        assert!(!entry.confirmed_work_day);

        let confirmed = confirm_work_day(None, date(), &WorkSchedule::default());
        let entry = set_day_type(Some(confirmed), date(), DayType::Off);
        assert!(entry.confirmed_work_day);
    }

    #[test]
    fn travel_events_fill_start_and_arrival() {
        let entry = set_travel_event(
            None,
            date(),
            TravelEvent::Start,
            ts(6, 0),
            Some("Leipzig".into()),
        );
        let entry = set_travel_event(
            Some(entry),
            date(),
            TravelEvent::Arrive,
            ts(7, 45),
            Some("Halle".into()),
        );

        assert_eq!(entry.travel_start_at, Some(ts(6, 0)));
        assert_eq!(entry.travel_arrive_at, Some(ts(7, 45)));
        assert_eq!(entry.travel_label_start.as_deref(), Some("Leipzig"));
        assert_eq!(entry.travel_label_end.as_deref(), Some("Halle"));
        assert_eq!(calculate_travel_minutes(&entry), 105);
    }

    #[test]
    fn departure_overwrites_start() {
        let entry = set_travel_event(None, date(), TravelEvent::Start, ts(6, 0), None);
        let entry = set_travel_event(Some(entry), date(), TravelEvent::Departure, ts(15, 0), None);
        assert_eq!(entry.travel_start_at, Some(ts(15, 0)));
    }

    #[test]
    fn clear_travel_requires_entry() {
        assert_eq!(
            clear_travel(None, date()),
            Err(ValidationError::MissingEntry { date: date() })
        );

        let entry = set_travel_event(None, date(), TravelEvent::Start, ts(6, 0), None);
        let cleared = clear_travel(Some(entry), date()).unwrap();
        assert!(!cleared.has_travel());
    }

    #[test]
    fn clear_travel_keeps_paid_minutes() {
        let entry = DayEntry {
            travel_start_at: Some(ts(6, 0)),
            travel_arrive_at: Some(ts(7, 0)),
            travel_label_start: Some("Leipzig".into()),
            travel_paid_minutes: Some(75),
            ..DayEntry::new(date())
        };
        let cleared = clear_travel(Some(entry), date()).unwrap();

        assert_eq!(cleared.travel_start_at, None);
        assert_eq!(cleared.travel_arrive_at, None);
        assert_eq!(cleared.travel_label_start, None);
        assert_eq!(cleared.travel_paid_minutes, Some(75));
        assert_eq!(calculate_travel_minutes(&cleared), 75);
    }

    #[test]
    fn update_entry_requires_entry() {
        assert_eq!(
            update_entry(None, date(), EntryUpdate::default()),
            Err(ValidationError::MissingEntry { date: date() })
        );
    }

    #[test]
    fn update_entry_changes_only_given_fields() {
        let existing = confirm_work_day(None, date(), &WorkSchedule::default());
        let update = EntryUpdate {
            work_end: Some(hm(16, 30)),
            break_minutes: Some(30),
            note: Some("Abnahme".into()),
            ..EntryUpdate::default()
        };
        let entry = update_entry(Some(existing), date(), update).unwrap();

        assert_eq!(entry.work_start, hm(8, 0));
        assert_eq!(entry.work_end, hm(16, 30));
        assert_eq!(entry.break_minutes, 30);
        assert_eq!(entry.note.as_deref(), Some("Abnahme"));
        assert_eq!(entry.day_type, DayType::Work);
        assert!(entry.confirmed_work_day);
        assert_eq!(calculate_work_minutes(&entry), 480);
    }

    #[test]
    fn update_entry_empty_note_clears() {
        let existing = DayEntry {
            note: Some("alt".into()),
            ..DayEntry::new(date())
        };
        let update = EntryUpdate {
            note: Some(String::new()),
            travel_paid_minutes: Some(30),
            ..EntryUpdate::default()
        };
        assert!(!update.is_empty());
        assert!(EntryUpdate::default().is_empty());

        let entry = update_entry(Some(existing), date(), update).unwrap();
        assert_eq!(entry.note, None);
        assert_eq!(entry.travel_paid_minutes, Some(30));
    }
}
