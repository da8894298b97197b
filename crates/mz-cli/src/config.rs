//! Configuration loading and management.

use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use mz_core::{DEFAULT_BREAK_MINUTES, DEFAULT_WORK_END, DEFAULT_WORK_START, WorkSchedule};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the JSON file holding day entries.
    pub entries_path: PathBuf,

    /// Standard start of a work day.
    #[serde(with = "mz_core::clock")]
    pub work_start: NaiveTime,

    /// Standard end of a work day.
    #[serde(with = "mz_core::clock")]
    pub work_end: NaiveTime,

    /// Standard break in minutes.
    pub break_minutes: i64,

    /// Round distance-based travel up to this many minutes (0 disables).
    pub rounding_step_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            entries_path: data_dir.join("entries.json"),
            work_start: DEFAULT_WORK_START,
            work_end: DEFAULT_WORK_END,
            break_minutes: i64::from(DEFAULT_BREAK_MINUTES),
            rounding_step_minutes: 0,
        }
    }
}

impl Config {
    /// Loads configuration from the default locations, then from
    /// `config_path` if given, then from `MZ_*` environment variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (MZ_*)
        figment = figment.merge(Env::prefixed("MZ_"));

        figment.extract()
    }

    /// The configured working day.
    pub const fn schedule(&self) -> WorkSchedule {
        WorkSchedule {
            work_start: self.work_start,
            work_end: self.work_end,
            break_minutes: self.break_minutes,
        }
    }

    /// Target hours for one work day.
    pub fn daily_target_hours(&self) -> f64 {
        self.schedule().daily_target_hours()
    }
}

/// Returns the platform-specific config directory for mz.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("mz"))
}

/// Returns the platform-specific data directory for mz.
///
/// On Linux: `~/.local/share/mz`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("mz"))
}
