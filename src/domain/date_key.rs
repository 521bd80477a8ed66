//! Date keys and how ranges over them are compared
//!
//! Entries are keyed by the date string exactly as the user typed it. The
//! expected shape is DD-MM-YYYY but nothing enforces it, so every calendar
//! operation here has to tolerate keys that do not parse.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// chrono format string for DD-MM-YYYY
pub const DATE_KEY_FORMAT: &str = "%d-%m-%Y";

/// Format a date as a DD-MM-YYYY key
pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a DD-MM-YYYY key, returning None for anything else
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

/// How the bounds of a date range are compared against stored keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RangeOrder {
    /// Plain string comparison of the keys.
    ///
    /// Because keys are day-first this only matches calendar order within a
    /// single month and year: "20-12-2024" sorts after "05-01-2025".
    #[default]
    Lexicographic,
    /// Calendar comparison; keys that are not DD-MM-YYYY never match
    Chronological,
}

impl RangeOrder {
    /// Compare two keys. Returns None when chronological comparison is
    /// requested and either side does not parse.
    pub fn compare(&self, a: &str, b: &str) -> Option<Ordering> {
        match self {
            RangeOrder::Lexicographic => Some(a.cmp(b)),
            RangeOrder::Chronological => Some(parse_date_key(a)?.cmp(&parse_date_key(b)?)),
        }
    }

    /// Whether `key` lies within `start..=end`
    pub fn contains(&self, start: &str, end: &str, key: &str) -> bool {
        matches!(
            self.compare(start, key),
            Some(Ordering::Less | Ordering::Equal)
        ) && matches!(
            self.compare(key, end),
            Some(Ordering::Less | Ordering::Equal)
        )
    }
}

impl FromStr for RangeOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lexicographic" => Ok(RangeOrder::Lexicographic),
            "chronological" => Ok(RangeOrder::Chronological),
            _ => Err(format!(
                "Invalid range order: '{}'. Valid values are: lexicographic, chronological",
                s
            )),
        }
    }
}
