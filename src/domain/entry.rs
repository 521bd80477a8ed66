//! Diary entry model

use crate::domain::Section;
use serde::{Deserialize, Serialize};

/// A single day's entry, keyed by its raw date string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub date: String,
    #[serde(default)]
    pub morning: String,
    #[serde(default)]
    pub afternoon: String,
    #[serde(default)]
    pub evening: String,
}

impl DiaryEntry {
    /// Create an entry with every section empty
    pub fn new(date: impl Into<String>) -> Self {
        DiaryEntry {
            date: date.into(),
            ..Default::default()
        }
    }

    pub fn section(&self, section: Section) -> &str {
        match section {
            Section::Morning => &self.morning,
            Section::Afternoon => &self.afternoon,
            Section::Evening => &self.evening,
        }
    }

    /// Overwrite one section, leaving the other two untouched
    pub fn set_section(&mut self, section: Section, content: impl Into<String>) {
        let slot = match section {
            Section::Morning => &mut self.morning,
            Section::Afternoon => &mut self.afternoon,
            Section::Evening => &mut self.evening,
        };
        *slot = content.into();
    }
}
