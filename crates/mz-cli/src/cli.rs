//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use mz_core::{DayType, TravelEvent};

/// MontageZeit time sheet.
///
/// Records confirmed work days, days off and travel, and reports paid hours
/// and overtime against the configured working day.
#[derive(Debug, Parser)]
#[command(name = "mz", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Confirm a day as a work day.
    ConfirmWork {
        /// Day to confirm (default: today).
        #[arg(long)]
        date: Option<String>,
    },

    /// Confirm a day as a day off. Clears recorded travel.
    ConfirmOff {
        /// Day to confirm (default: today).
        #[arg(long)]
        date: Option<String>,
    },

    /// Change the day type without confirming.
    DayType {
        /// New day type.
        #[arg(value_enum)]
        day_type: DayTypeArg,

        /// Day to change (default: today).
        #[arg(long)]
        date: Option<String>,
    },

    /// Correct the recorded times, break, note or paid travel of a day.
    Edit {
        /// Day to edit (default: today).
        #[arg(long)]
        date: Option<String>,

        /// Start of work (HH:MM).
        #[arg(long, value_parser = mz_core::clock::parse)]
        start: Option<NaiveTime>,

        /// End of work (HH:MM).
        #[arg(long, value_parser = mz_core::clock::parse)]
        end: Option<NaiveTime>,

        /// Break in minutes.
        #[arg(long = "break", value_name = "MINUTES")]
        break_minutes: Option<u32>,

        /// Note; an empty string removes it.
        #[arg(long)]
        note: Option<String>,

        /// Paid travel minutes, overriding recorded travel times.
        #[arg(long, value_name = "MINUTES", allow_negative_numbers = true)]
        travel_minutes: Option<i64>,
    },

    /// Delete the entry of a day.
    Delete {
        /// Day to delete.
        #[arg(long)]
        date: String,
    },

    /// Record or clear travel for a day.
    Travel {
        #[command(subcommand)]
        action: TravelAction,
    },

    /// Show overtime for a period.
    Overtime {
        #[command(flatten)]
        period: PeriodArgs,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the days of a week with their hours.
    Week {
        /// Any day within the week (default: today).
        #[arg(long)]
        date: Option<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Export entries with derived hours to stdout.
    Export {
        /// Output format.
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// First day to export (default: earliest entry).
        #[arg(long)]
        from: Option<String>,

        /// Last day to export (default: latest entry).
        #[arg(long)]
        to: Option<String>,
    },

    /// Compute paid travel for a driven distance.
    Compensation {
        /// Distance in kilometres.
        #[arg(long)]
        km: f64,

        /// Round up to this many minutes (default: from config).
        #[arg(long)]
        step: Option<u32>,

        /// Store the result as paid travel on this day.
        #[arg(long)]
        date: Option<String>,
    },
}

/// Travel subcommands.
#[derive(Debug, Subcommand)]
pub enum TravelAction {
    /// Record a travel event.
    Record {
        /// Which end of the leg.
        #[arg(value_enum)]
        event: TravelEventArg,

        /// Day of the travel (default: today).
        #[arg(long)]
        date: Option<String>,

        /// Time of the event as RFC 3339 or HH:MM on the day (default: now).
        #[arg(long)]
        at: Option<String>,

        /// Place label.
        #[arg(long)]
        label: Option<String>,
    },

    /// Remove all travel from a day.
    Clear {
        /// Day to clear (default: today).
        #[arg(long)]
        date: Option<String>,
    },
}

/// Period selection for reports. Defaults to the current week.
#[derive(Debug, Clone, Default, Args)]
#[group(multiple = false)]
pub struct PeriodArgs {
    /// Current ISO week.
    #[arg(long)]
    pub week: bool,

    /// Previous ISO week.
    #[arg(long)]
    pub last_week: bool,

    /// Current calendar month.
    #[arg(long)]
    pub month: bool,

    /// Previous calendar month.
    #[arg(long)]
    pub last_month: bool,

    /// Explicit range as FROM..TO (dates inclusive).
    #[arg(long, value_name = "FROM..TO")]
    pub range: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DayTypeArg {
    Work,
    Off,
}

impl From<DayTypeArg> for DayType {
    fn from(arg: DayTypeArg) -> Self {
        match arg {
            DayTypeArg::Work => Self::Work,
            DayTypeArg::Off => Self::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TravelEventArg {
    Start,
    Arrive,
    Departure,
}

impl From<TravelEventArg> for TravelEvent {
    fn from(arg: TravelEventArg) -> Self {
        match arg {
            TravelEventArg::Start => Self::Start,
            TravelEventArg::Arrive => Self::Arrive,
            TravelEventArg::Departure => Self::Departure,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}
