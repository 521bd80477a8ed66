//! Diary sections (periods of the day)

use crate::error::DiaryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three periods an entry is split into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Morning,
    Afternoon,
    Evening,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Morning, Section::Afternoon, Section::Evening];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Morning => "morning",
            Section::Afternoon => "afternoon",
            Section::Evening => "evening",
        }
    }

    /// Label used when prompting or printing ("Morning", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Section::Morning => "Morning",
            Section::Afternoon => "Afternoon",
            Section::Evening => "Evening",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing is exact and case-sensitive; callers lowercase user input first.
impl FromStr for Section {
    type Err = DiaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(Section::Morning),
            "afternoon" => Ok(Section::Afternoon),
            "evening" => Ok(Section::Evening),
            _ => Err(DiaryError::InvalidSection(s.to_string())),
        }
    }
}
