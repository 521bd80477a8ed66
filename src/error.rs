//! Error types for diary

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the diary application
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username '{0}' already exists")]
    DuplicateUsername(String),

    #[error("Invalid section: {0} (must be morning, afternoon, or evening)")]
    InvalidSection(String),

    #[error("No entry found for date: {0}")]
    NotFound(String),

    #[error("Failed to decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DiaryError {
    pub(crate) fn decode(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        DiaryError::Decode {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaryError::InvalidSection(section) => {
                format!(
                    "Invalid section: '{}'\n\n\
                    Valid sections:\n\
                    • morning\n\
                    • afternoon\n\
                    • evening",
                    section
                )
            }
            DiaryError::Decode { path, message } => {
                format!(
                    "Failed to decode {}: {}\n\n\
                    Suggestions:\n\
                    • Check the file is valid JSON\n\
                    • Restore it from a backup or move it aside to start fresh",
                    path.display(),
                    message
                )
            }
            DiaryError::Config(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Pass --data-dir or set DIARY_HOME to choose a data directory\n\
                    • Valid range_order values: lexicographic, chronological",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;
