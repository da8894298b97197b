//! MontageZeit CLI library.
//!
//! This crate provides the CLI interface for the time sheet: the entry store,
//! configuration, and the commands that edit entries and render reports.

mod cli;
pub mod commands;
mod config;
pub mod store;

pub use cli::{Cli, Commands, DayTypeArg, ExportFormat, PeriodArgs, TravelAction, TravelEventArg};
pub use config::Config;
