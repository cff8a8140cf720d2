//! Highscore store
//!
//! A single integer persisted as `{"highscore": <n>}`. Reads never fail: a
//! missing or malformed record reads as 0.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::persistence::{self, PersistError};

/// On-disk record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighscoreRecord {
    #[serde(default)]
    pub highscore: u64,
}

/// Where the best score lives between runs
pub trait HighscoreStore {
    /// Current highscore, 0 if none has been recorded
    fn load(&self) -> u64;

    /// Overwrite the stored highscore
    fn save(&mut self, highscore: u64) -> Result<(), PersistError>;
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct FileHighscoreStore {
    path: PathBuf,
}

impl FileHighscoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighscoreStore for FileHighscoreStore {
    fn load(&self) -> u64 {
        match persistence::read_json::<HighscoreRecord>(&self.path) {
            Ok(record) => record.highscore,
            Err(e) if e.is_not_found() => 0,
            Err(e) => {
                log::warn!(
                    "Highscore file {} unreadable ({}), treating as 0",
                    self.path.display(),
                    e
                );
                0
            }
        }
    }

    fn save(&mut self, highscore: u64) -> Result<(), PersistError> {
        persistence::write_json(&self.path, &HighscoreRecord { highscore })?;
        log::info!("Highscore {} saved to {}", highscore, self.path.display());
        Ok(())
    }
}

/// In-memory store for tests and demo runs that shouldn't touch disk
#[derive(Debug, Clone, Default)]
pub struct MemoryHighscoreStore {
    pub highscore: Option<u64>,
    /// Number of successful saves
    pub saves: usize,
}

impl MemoryHighscoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_highscore(highscore: u64) -> Self {
        Self {
            highscore: Some(highscore),
            saves: 0,
        }
    }
}

impl HighscoreStore for MemoryHighscoreStore {
    fn load(&self) -> u64 {
        self.highscore.unwrap_or(0)
    }

    fn save(&mut self, highscore: u64) -> Result<(), PersistError> {
        self.highscore = Some(highscore);
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dino_runner_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_reads_zero() {
        let store = FileHighscoreStore::new(temp_path("hs_missing"));
        let _ = std::fs::remove_file(store.path());
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = FileHighscoreStore::new(temp_path("hs_roundtrip"));
        store.save(42).unwrap();
        assert_eq!(store.load(), 42);

        store.save(7).unwrap();
        assert_eq!(store.load(), 7);

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(text, r#"{"highscore":7}"#);
        let _ = std::fs::remove_file(store.path());
    }

    #[test]
    fn test_malformed_file_reads_zero() {
        let store = FileHighscoreStore::new(temp_path("hs_malformed"));
        for contents in ["not json", r#"{"highscore": "lots"}"#, r#"{"highscore": -3}"#] {
            std::fs::write(store.path(), contents).unwrap();
            assert_eq!(store.load(), 0, "contents: {}", contents);
        }
        let _ = std::fs::remove_file(store.path());
    }

    #[test]
    fn test_missing_key_reads_zero() {
        let store = FileHighscoreStore::new(temp_path("hs_nokey"));
        std::fs::write(store.path(), r#"{"other": 12}"#).unwrap();
        assert_eq!(store.load(), 0);
        let _ = std::fs::remove_file(store.path());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryHighscoreStore::new();
        assert_eq!(store.load(), 0);
        store.save(15).unwrap();
        assert_eq!(store.load(), 15);
        assert_eq!(store.saves, 1);
    }
}
