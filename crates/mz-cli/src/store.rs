//! File-backed storage for day entries.
//!
//! Entries live in a single JSON array, sorted by date, one entry per date.
//! The whole file is read on open and rewritten on [`EntryStore::save`]. Saves
//! go through a sibling temp file and a rename, so an interrupted write leaves
//! the previous file intact.
//!
//! # Thread Safety
//!
//! An [`EntryStore`] is an in-memory copy of the file. Two processes saving
//! the same file concurrently will overwrite each other's changes; the CLI
//! runs one command per process and does not lock the file.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use mz_core::DayEntry;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the entries file failed.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The entries file is not a valid JSON array of entries.
    #[error("invalid entries file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The entries file holds two entries for the same date.
    #[error("duplicate entry for {date} in {path}")]
    DuplicateDate { path: PathBuf, date: NaiveDate },
}

/// Day entries keyed by date.
#[derive(Debug)]
pub struct EntryStore {
    path: PathBuf,
    entries: BTreeMap<NaiveDate, DayEntry>,
}

impl EntryStore {
    /// Opens the entries file at `path`.
    ///
    /// A missing file is an empty store; it is created on the first save.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let entries = match std::fs::read_to_string(path) {
            Ok(content) => parse_entries(path, &content)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "entries file not found, starting empty");
                BTreeMap::new()
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        tracing::debug!(path = %path.display(), count = entries.len(), "loaded entries");
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&DayEntry> {
        self.entries.get(&date)
    }

    /// Inserts or replaces the entry for its date.
    pub fn upsert(&mut self, entry: DayEntry) {
        self.entries.insert(entry.date, entry);
    }

    /// Removes the entry for `date`, returning it.
    pub fn remove(&mut self, date: NaiveDate) -> Option<DayEntry> {
        self.entries.remove(&date)
    }

    /// Entries from `start` to `end`, both inclusive, ordered by date.
    pub fn range(&self, start: NaiveDate, end: NaiveDate) -> Vec<DayEntry> {
        if end < start {
            return Vec::new();
        }
        self.entries.range(start..=end).map(|(_, e)| e.clone()).collect()
    }

    /// All entries ordered by date.
    pub fn all(&self) -> Vec<DayEntry> {
        self.entries.values().cloned().collect()
    }

    /// Writes all entries back to the file.
    pub fn save(&self) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let entries: Vec<&DayEntry> = self.entries.values().collect();
        let json = serde_json::to_string_pretty(&entries).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json + "\n").map_err(io_err)?;
        std::fs::rename(&tmp, &self.path).map_err(io_err)?;

        tracing::debug!(path = %self.path.display(), count = entries.len(), "saved entries");
        Ok(())
    }
}

fn parse_entries(path: &Path, content: &str) -> Result<BTreeMap<NaiveDate, DayEntry>, StoreError> {
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    let list: Vec<DayEntry> = serde_json::from_str(content).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = BTreeMap::new();
    for entry in list {
        let date = entry.date;
        if entries.insert(date, entry).is_some() {
            return Err(StoreError::DuplicateDate {
                path: path.to_path_buf(),
                date,
            });
        }
    }
    Ok(entries)
}
