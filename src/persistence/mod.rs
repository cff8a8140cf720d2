//! JSON file persistence
//!
//! Writes go to a temporary sibling first and are renamed into place, so a
//! crash mid-write never leaves a truncated file behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure reading or writing a persisted file
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PersistError {
    /// True if the file simply doesn't exist yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, PersistError::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

/// Read and deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PersistError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Serialize `value` and replace the file at `path`
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistError> {
    let json = serde_json::to_string(value)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
