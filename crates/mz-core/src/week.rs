//! ISO week helpers.

use chrono::{Datelike, Duration, NaiveDate};

/// Monday of the ISO week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// The seven days Monday to Sunday of the week starting at `week_start`.
pub fn week_days(week_start: NaiveDate) -> [NaiveDate; 7] {
    let mut days = [week_start; 7];
    for (offset, day) in (0_i64..).zip(days.iter_mut()) {
        *day = week_start + Duration::days(offset);
    }
    days
}
