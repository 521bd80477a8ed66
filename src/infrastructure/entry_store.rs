//! Per-user entry store backed by a single JSON file

use crate::domain::{parse_date_key, DiaryEntry, RangeOrder, Section};
use crate::error::{DiaryError, Result};
use crate::infrastructure::json_file;
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One user's diary, keyed by the raw date string
#[derive(Debug)]
pub struct EntryStore {
    path: PathBuf,
    entries: BTreeMap<String, DiaryEntry>,
}

impl EntryStore {
    /// Load the store from `path`, starting empty if the file is missing
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries: BTreeMap<String, DiaryEntry> = json_file::load_or_default(&path)?;

        if let Some((key, entry)) = entries.iter().find(|(k, e)| **k != e.date) {
            return Err(DiaryError::decode(
                &path,
                format!("entry '{}' is dated '{}'", key, entry.date),
            ));
        }

        log::debug!("Loaded {} entries from {}", entries.len(), path.display());
        Ok(EntryStore { path, entries })
    }

    /// Create or update one section of the entry for `date`, then persist.
    ///
    /// `section` must be exactly "morning", "afternoon" or "evening".
    pub fn add_entry(&mut self, date: &str, section: &str, content: &str) -> Result<()> {
        let section: Section = section.parse()?;
        self.set_section(date, section, content)
    }

    /// Typed variant of [`EntryStore::add_entry`]
    pub fn set_section(&mut self, date: &str, section: Section, content: &str) -> Result<()> {
        self.entries
            .entry(date.to_string())
            .or_insert_with(|| DiaryEntry::new(date))
            .set_section(section, content);

        self.save()
    }

    pub fn get_entry(&self, date: &str) -> Option<&DiaryEntry> {
        self.entries.get(date)
    }

    /// Every stored date key. Callers should not depend on the order.
    pub fn list_dates(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Remove the entry for `date` and persist
    pub fn delete_entry(&mut self, date: &str) -> Result<()> {
        if self.entries.remove(date).is_none() {
            return Err(DiaryError::NotFound(date.to_string()));
        }
        log::info!("Deleted entry {}", date);

        self.save()
    }

    /// Entries whose key lies within `start..=end` under `order`
    pub fn entries_between(&self, start: &str, end: &str, order: RangeOrder) -> Vec<&DiaryEntry> {
        self.entries
            .iter()
            .filter(|(key, _)| order.contains(start, end, key))
            .map(|(_, entry)| entry)
            .collect()
    }

    /// Entries dated within the `days` days up to and including `today`,
    /// newest first. Keys that are not DD-MM-YYYY are ignored.
    ///
    /// A window reaching past the earliest representable date covers
    /// everything up to `today`.
    pub fn latest(&self, days: u32, today: NaiveDate) -> Vec<&DiaryEntry> {
        let since = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);

        let mut dated: Vec<(NaiveDate, &DiaryEntry)> = self
            .entries
            .iter()
            .filter_map(|(key, entry)| parse_date_key(key).map(|d| (d, entry)))
            .filter(|(d, _)| *d >= since && *d <= today)
            .collect();

        dated.sort_by(|a, b| b.0.cmp(&a.0));
        dated.into_iter().map(|(_, entry)| entry).collect()
    }

    /// Every entry in key order
    pub fn entries(&self) -> impl Iterator<Item = &DiaryEntry> {
        self.entries.values()
    }

    /// Rewrite the whole backing file
    pub fn save(&self) -> Result<()> {
        json_file::save(&self.path, &self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
