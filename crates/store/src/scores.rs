//! Score persistence: read the ledger at startup, write it after every
//! record or reset.
//!
//! The store never fails the game over a bad file: a missing document seeds
//! an empty ledger, and a corrupt one is logged and replaced on the next
//! save. Only writing reports errors, since losing a result is worth
//! surfacing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::ScoreLedger;
use crate::schema::ScoresFile;

/// Environment variable overriding the score file location.
pub const SCORES_PATH_ENV: &str = "MEMORY_SCORES_PATH";

const DEFAULT_SCORES_PATH: &str = "memory_scores.json";

/// Durable storage for the score ledger at a fixed path.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the path from `MEMORY_SCORES_PATH`, or the default file in the
    /// working directory.
    pub fn from_env() -> Self {
        let path = std::env::var(SCORES_PATH_ENV).unwrap_or_else(|_| DEFAULT_SCORES_PATH.into());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted ledger, seeding an empty one when absent or corrupt.
    pub fn load(&self) -> ScoreLedger {
        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice::<ScoresFile>(&bytes) {
                Ok(file) => file.into_ledger(),
                Err(err) => {
                    log::warn!(
                        "corrupt score file {}: {err}; starting with an empty ledger",
                        self.path.display()
                    );
                    ScoreLedger::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => ScoreLedger::new(),
            Err(err) => {
                log::warn!(
                    "cannot read score file {}: {err}; starting with an empty ledger",
                    self.path.display()
                );
                ScoreLedger::new()
            }
        }
    }

    /// Write the full ledger state.
    pub fn save(&self, ledger: &ScoreLedger) -> Result<()> {
        let json = serde_json::to_vec_pretty(&ScoresFile::from_ledger(ledger))?;
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating score directory {}", dir.display()))?;
            }
        }
        fs::write(&self.path, json)
            .with_context(|| format!("writing score file {}", self.path.display()))?;
        log::debug!("saved scores to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardSize;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("tui-memory-{name}-{}", std::process::id()));
        path
    }

    #[test]
    fn missing_file_loads_empty_ledger() {
        let store = ScoreStore::new(temp_path("missing"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_path("roundtrip");
        let store = ScoreStore::new(&path);

        let mut ledger = ScoreLedger::new();
        ledger.record(BoardSize::TwentyFour, 31, 1_700_000_000_000);
        ledger.record(BoardSize::TwentyFour, 18, 1_700_000_100_000);
        store.save(&ledger).unwrap();

        assert_eq!(store.load(), ledger);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_recovers_with_empty_ledger() {
        let path = temp_path("corrupt");
        fs::write(&path, b"{ not json").unwrap();

        let store = ScoreStore::new(&path);
        assert!(store.load().is_empty());
        let _ = fs::remove_file(&path);
    }
}
