//! Persisted score file format.
//!
//! The document mirrors the shape the game has always saved: a map from board
//! size to a ranked list of `{date, flips}` entries:
//!
//! ```json
//! {
//!   "scores": {
//!     "12": [ { "date": 1722945600000, "flips": 7 } ]
//!   }
//! }
//! ```
//!
//! `date` is Unix epoch milliseconds; `flips` is the final move count. Sizes
//! outside the supported catalog are dropped on load.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::ScoreLedger;
use crate::types::BoardSize;

/// One persisted result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    /// Unix epoch milliseconds of the completed round.
    pub date: u64,
    /// Move count the round finished with.
    pub flips: u32,
}

/// Root of the persisted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoresFile {
    /// Board size (decimal string key) to ranked entries, best first.
    #[serde(default)]
    pub scores: BTreeMap<String, Vec<StoredEntry>>,
}

impl ScoresFile {
    pub fn from_ledger(ledger: &ScoreLedger) -> Self {
        let mut scores = BTreeMap::new();
        for (size, entries) in ledger.iter() {
            scores.insert(
                size.as_str().to_string(),
                entries
                    .iter()
                    .map(|e| StoredEntry {
                        date: e.timestamp_ms,
                        flips: e.moves,
                    })
                    .collect(),
            );
        }
        Self { scores }
    }

    /// Rebuild a ledger, re-ranking and re-capping as entries are replayed so
    /// a hand-edited or stale file still yields a valid ledger.
    pub fn into_ledger(self) -> ScoreLedger {
        let mut ledger = ScoreLedger::new();
        for (key, entries) in self.scores {
            let Some(size) = BoardSize::from_str(&key) else {
                log::warn!("dropping scores for unsupported board size {key:?}");
                continue;
            };
            for entry in entries {
                ledger.record(size, entry.flips, entry.date);
            }
        }
        ledger
    }
}
