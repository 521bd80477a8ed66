//! Whole-document JSON persistence
//!
//! Both stores keep their entire state in one JSON file that is read once at
//! construction and rewritten in full after every mutation.

use crate::error::{DiaryError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// Create the parent directory of `path` if it is missing
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Load a document, or `T::default()` if the file does not exist yet.
pub fn load_or_default<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    ensure_parent_dir(path)?;

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{} does not exist yet, starting empty", path.display());
            return Ok(T::default());
        }
        Err(e) => return Err(DiaryError::Io(e)),
    };

    serde_json::from_str(&contents).map_err(|e| DiaryError::decode(path, e))
}

/// Overwrite `path` with the pretty-printed document.
///
/// The JSON is written to a temp file next to the target and renamed into
/// place, so a crash mid-write leaves the previous version intact.
pub fn save<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    ensure_parent_dir(path)?;

    let mut contents = serde_json::to_string_pretty(value)
        .map_err(|e| DiaryError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    contents.push('\n');

    let tmp_name = format!(
        ".{}.tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("diary.json"),
        std::process::id()
    );
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, contents)?;
    replace_document(&tmp_path, path)?;

    log::debug!("Saved {}", path.display());
    Ok(())
}

/// Move the freshly written temp file over the document.
///
/// The previous document is only removed when rename itself cannot replace
/// an existing file (Windows) and the temp file is known to be in place.
/// Any other failure leaves the previous document untouched and drops the
/// temp file.
fn replace_document(tmp: &Path, target: &Path) -> io::Result<()> {
    let Err(err) = fs::rename(tmp, target) else {
        return Ok(());
    };

    if cfg!(windows) && tmp.is_file() && target.is_file() {
        fs::remove_file(target)?;
        if fs::rename(tmp, target).is_ok() {
            return Ok(());
        }
    }

    let _ = fs::remove_file(tmp);
    Err(io::Error::new(
        err.kind(),
        format!("Could not replace {}: {}", target.display(), err),
    ))
}
