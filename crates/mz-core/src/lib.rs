//! Core domain logic for MontageZeit.
//!
//! This crate contains the paid-time arithmetic behind the time sheet:
//! - Time calculation: worked, travel and paid minutes for one day entry
//! - Overtime: folding a range of day entries into actual vs. target hours
//! - Schedule: the daily target derived from the configured working day
//! - Edits: confirming days and recording travel on day entries
//!
//! Nothing here performs I/O. Callers load entries, pass them in, and render
//! the results.

pub mod clock;
pub mod edit;
pub mod format;
mod overtime;
mod schedule;
pub mod time_calc;
pub mod travel;
mod types;
pub mod week;

pub use edit::{EntryUpdate, TravelEvent};
pub use overtime::{RangeAggregator, RangeResult, compute_range};
pub use schedule::WorkSchedule;
pub use travel::{TravelCompensation, travel_compensation};
pub use types::{
    DEFAULT_BREAK_MINUTES, DEFAULT_WORK_END, DEFAULT_WORK_START, DayEntry, DayType,
    ValidationError,
};
