//! Score ledger: bounded ranked history of round results per board size.
//!
//! Fewer moves is better. Each size keeps at most [`SCOREBOARD_CAP`] entries,
//! sorted ascending by move count; entries are immutable once recorded. The
//! ledger is plain state - persistence lives in the store crate, and the round
//! engine never touches the ledger directly.

use std::collections::BTreeMap;

use tui_memory_types::{BoardSize, SCOREBOARD_CAP};

/// One recorded round result. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Unix epoch milliseconds, supplied by the caller.
    pub timestamp_ms: u64,
    /// Final move count of the completed round.
    pub moves: u32,
    /// Board size the result was achieved on.
    pub size: BoardSize,
}

/// Per-size ranked score lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLedger {
    scores: BTreeMap<BoardSize, Vec<ScoreEntry>>,
}

impl ScoreLedger {
    /// An empty ledger with every supported size seeded.
    pub fn new() -> Self {
        let mut scores = BTreeMap::new();
        for size in BoardSize::ALL {
            scores.insert(size, Vec::new());
        }
        Self { scores }
    }

    /// Record a completed round.
    ///
    /// Appends, re-sorts ascending by move count (stable, so equal counts keep
    /// insertion order) and truncates to the cap. Other sizes' lists are
    /// untouched.
    pub fn record(&mut self, size: BoardSize, moves: u32, timestamp_ms: u64) {
        let list = self.scores.entry(size).or_default();
        list.push(ScoreEntry {
            timestamp_ms,
            moves,
            size,
        });
        list.sort_by_key(|entry| entry.moves);
        list.truncate(SCOREBOARD_CAP);
    }

    /// Clear one size's list, or every list when `size` is `None`.
    pub fn reset(&mut self, size: Option<BoardSize>) {
        match size {
            Some(size) => {
                self.scores.entry(size).or_default().clear();
            }
            None => {
                for list in self.scores.values_mut() {
                    list.clear();
                }
            }
        }
    }

    /// Ranked entries for a size, best first. Empty if none recorded.
    pub fn scores(&self, size: BoardSize) -> &[ScoreEntry] {
        self.scores.get(&size).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The best (lowest-move) entry for a size.
    pub fn best(&self, size: BoardSize) -> Option<&ScoreEntry> {
        self.scores(size).first()
    }

    /// True when no size has any recorded entry.
    pub fn is_empty(&self) -> bool {
        self.scores.values().all(Vec::is_empty)
    }

    /// Iterate all sizes with their ranked lists, smallest size first.
    pub fn iter(&self) -> impl Iterator<Item = (BoardSize, &[ScoreEntry])> {
        self.scores.iter().map(|(size, list)| (*size, list.as_slice()))
    }
}

impl Default for ScoreLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ledger_seeds_all_sizes_empty() {
        let ledger = ScoreLedger::new();
        assert!(ledger.is_empty());
        for size in BoardSize::ALL {
            assert!(ledger.scores(size).is_empty());
        }
        assert_eq!(ledger.iter().count(), BoardSize::ALL.len());
    }

    #[test]
    fn test_record_keeps_ascending_order() {
        let mut ledger = ScoreLedger::new();
        for (i, moves) in [9u32, 3, 7, 5].into_iter().enumerate() {
            ledger.record(BoardSize::Twelve, moves, i as u64);
        }

        let moves: Vec<u32> = ledger
            .scores(BoardSize::Twelve)
            .iter()
            .map(|e| e.moves)
            .collect();
        assert_eq!(moves, vec![3, 5, 7, 9]);
        assert_eq!(ledger.best(BoardSize::Twelve).unwrap().moves, 3);
    }

    #[test]
    fn test_cap_drops_the_worst_result() {
        let mut ledger = ScoreLedger::new();
        let results = [20u32, 5, 15, 8, 30, 2, 12, 25, 18, 9, 1];
        for (i, moves) in results.into_iter().enumerate() {
            ledger.record(BoardSize::Twelve, moves, i as u64);
        }

        let moves: Vec<u32> = ledger
            .scores(BoardSize::Twelve)
            .iter()
            .map(|e| e.moves)
            .collect();
        assert_eq!(moves, vec![1, 2, 5, 8, 9, 12, 15, 18, 20, 25]);
    }

    #[test]
    fn test_equal_move_counts_keep_insertion_order() {
        let mut ledger = ScoreLedger::new();
        ledger.record(BoardSize::Four, 6, 100);
        ledger.record(BoardSize::Four, 6, 200);
        ledger.record(BoardSize::Four, 4, 300);

        let entries = ledger.scores(BoardSize::Four);
        assert_eq!(entries[0].moves, 4);
        assert_eq!(entries[1].timestamp_ms, 100);
        assert_eq!(entries[2].timestamp_ms, 200);
    }

    #[test]
    fn test_sizes_are_independent() {
        let mut ledger = ScoreLedger::new();
        ledger.record(BoardSize::Four, 3, 1);
        ledger.record(BoardSize::FortyEight, 60, 2);

        assert_eq!(ledger.scores(BoardSize::Four).len(), 1);
        assert_eq!(ledger.scores(BoardSize::FortyEight).len(), 1);
        assert!(ledger.scores(BoardSize::Twelve).is_empty());
    }

    #[test]
    fn test_reset_single_size() {
        let mut ledger = ScoreLedger::new();
        ledger.record(BoardSize::Twelve, 10, 1);
        ledger.record(BoardSize::TwentyFour, 20, 2);

        ledger.reset(Some(BoardSize::Twelve));
        assert!(ledger.scores(BoardSize::Twelve).is_empty());
        assert_eq!(ledger.scores(BoardSize::TwentyFour).len(), 1);
    }

    #[test]
    fn test_reset_all_sizes() {
        let mut ledger = ScoreLedger::new();
        for size in BoardSize::ALL {
            ledger.record(size, 10, 1);
        }

        ledger.reset(None);
        assert!(ledger.is_empty());
    }
}
