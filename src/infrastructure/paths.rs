//! Location of the data directory and the files inside it

use crate::error::{DiaryError, Result};
use std::path::{Path, PathBuf};

const DATA_DIR_NAME: &str = ".diary";
const USERS_FILE: &str = "users.json";

/// Files of one diary installation, all under a single directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryPaths {
    root: PathBuf,
}

impl DiaryPaths {
    pub fn new(root: PathBuf) -> Self {
        DiaryPaths { root }
    }

    /// Use `data_dir` when given, otherwise `~/.diary`
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self> {
        match data_dir {
            Some(dir) => Ok(DiaryPaths::new(dir)),
            None => Ok(DiaryPaths::new(home_dir()?.join(DATA_DIR_NAME))),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn users_file(&self) -> PathBuf {
        self.root.join(USERS_FILE)
    }

    /// `<root>/<username>-diary.json`. The username is joined as-is, so one
    /// containing path separators (e.g. `../x`) lands outside the root.
    pub fn diary_file(&self, username: &str) -> PathBuf {
        self.root.join(format!("{}-diary.json", username))
    }
}

fn home_dir() -> Result<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| {
            DiaryError::Config("HOME is not set; cannot resolve the data directory".to_string())
        })
}
