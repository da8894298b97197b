use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mz_cli::commands::util::{date_or_today, parse_date, parse_event_time};
use mz_cli::commands::{day, export, overtime, travel, week};
use mz_cli::store::EntryStore;
use mz_cli::{Cli, Commands, Config, TravelAction};
use mz_core::EntryUpdate;

/// Load config and open the entry store.
fn open_store(config_path: Option<&Path>) -> Result<(EntryStore, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let store = EntryStore::open(&config.entries_path).context("failed to open entries")?;
    Ok((store, config))
}

#[expect(
    clippy::too_many_lines,
    reason = "CLI command dispatch is inherently verbose"
)]
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let today = Local::now().date_naive();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::ConfirmWork { date }) => {
            let (mut store, config) = open_store(cli.config.as_deref())?;
            let date = date_or_today(date.as_deref(), today)?;
            day::confirm_work(&mut out, &mut store, &config, date)?;
        }
        Some(Commands::ConfirmOff { date }) => {
            let (mut store, _config) = open_store(cli.config.as_deref())?;
            let date = date_or_today(date.as_deref(), today)?;
            day::confirm_off(&mut out, &mut store, date)?;
        }
        Some(Commands::DayType { day_type, date }) => {
            let (mut store, _config) = open_store(cli.config.as_deref())?;
            let date = date_or_today(date.as_deref(), today)?;
            day::set_day_type(&mut out, &mut store, date, (*day_type).into())?;
        }
        Some(Commands::Edit {
            date,
            start,
            end,
            break_minutes,
            note,
            travel_minutes,
        }) => {
            let (mut store, _config) = open_store(cli.config.as_deref())?;
            let date = date_or_today(date.as_deref(), today)?;
            let update = EntryUpdate {
                work_start: *start,
                work_end: *end,
                break_minutes: *break_minutes,
                note: note.clone(),
                travel_paid_minutes: *travel_minutes,
            };
            day::edit_entry(&mut out, &mut store, date, update)?;
        }
        Some(Commands::Delete { date }) => {
            let (mut store, _config) = open_store(cli.config.as_deref())?;
            let date = parse_date(date, today)?;
            day::delete(&mut out, &mut store, date)?;
        }
        Some(Commands::Travel { action }) => {
            let (mut store, _config) = open_store(cli.config.as_deref())?;
            match action {
                TravelAction::Record {
                    event,
                    date,
                    at,
                    label,
                } => {
                    let date = date_or_today(date.as_deref(), today)?;
                    let at = match at {
                        Some(at) => parse_event_time(at, date)?,
                        None => Utc::now(),
                    };
                    travel::record(&mut out, &mut store, date, (*event).into(), at, label.clone())?;
                }
                TravelAction::Clear { date } => {
                    let date = date_or_today(date.as_deref(), today)?;
                    travel::clear(&mut out, &mut store, date)?;
                }
            }
        }
        Some(Commands::Overtime { period, json }) => {
            let (store, config) = open_store(cli.config.as_deref())?;
            let period = overtime::Period::from_args(period, today)?;
            overtime::run(
                &mut out,
                &store,
                period,
                today,
                config.daily_target_hours(),
                *json,
            )?;
        }
        Some(Commands::Week { date, json }) => {
            let (store, config) = open_store(cli.config.as_deref())?;
            let date = date_or_today(date.as_deref(), today)?;
            week::run(&mut out, &store, date, config.daily_target_hours(), *json)?;
        }
        Some(Commands::Export { format, from, to }) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            let entries = match (from, to) {
                (None, None) => store.all(),
                (from, to) => {
                    let start = from
                        .as_deref()
                        .map(|s| parse_date(s, today))
                        .transpose()?
                        .unwrap_or(chrono::NaiveDate::MIN);
                    let end = to
                        .as_deref()
                        .map(|s| parse_date(s, today))
                        .transpose()?
                        .unwrap_or(chrono::NaiveDate::MAX);
                    store.range(start, end)
                }
            };
            export::run(&mut out, &entries, *format, Utc::now())?;
        }
        Some(Commands::Compensation { km, step, date }) => {
            let (mut store, config) = open_store(cli.config.as_deref())?;
            let step = step.unwrap_or(config.rounding_step_minutes);
            let date = date.as_deref().map(|s| parse_date(s, today)).transpose()?;
            travel::compensation(&mut out, &mut store, *km, step, date)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    out.flush()?;
    Ok(())
}
