//! Integration tests for score persistence: file shape, round-trips, recovery.

use std::fs;
use std::path::PathBuf;

use tui_memory::core::ScoreLedger;
use tui_memory::store::ScoreStore;
use tui_memory::types::BoardSize;

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("tui-memory-it-{name}-{}", std::process::id()));
    path
}

#[test]
fn test_persisted_document_shape() {
    let path = temp_path("shape");
    let store = ScoreStore::new(&path);

    let mut ledger = ScoreLedger::new();
    ledger.record(BoardSize::Twelve, 7, 1_722_945_600_000);
    store.save(&ledger).unwrap();

    let doc: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    let entry = &doc["scores"]["12"][0];
    assert_eq!(entry["flips"], 7);
    assert_eq!(entry["date"], 1_722_945_600_000u64);
    // Every supported size is present, even when empty.
    for size in BoardSize::ALL {
        assert!(doc["scores"][size.as_str()].is_array());
    }

    let _ = fs::remove_file(&path);
}

#[test]
fn test_load_save_round_trip_preserves_ranking() {
    let path = temp_path("ranking");
    let store = ScoreStore::new(&path);

    let mut ledger = ScoreLedger::new();
    for (i, moves) in [9u32, 3, 12, 3, 7].into_iter().enumerate() {
        ledger.record(BoardSize::TwentyFour, moves, i as u64);
    }
    store.save(&ledger).unwrap();

    let loaded = store.load();
    assert_eq!(loaded, ledger);
    let moves: Vec<u32> = loaded
        .scores(BoardSize::TwentyFour)
        .iter()
        .map(|e| e.moves)
        .collect();
    assert_eq!(moves, vec![3, 3, 7, 9, 12]);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_missing_file_seeds_empty_ledger() {
    let store = ScoreStore::new(temp_path("absent"));
    let ledger = store.load();
    assert!(ledger.is_empty());
}

#[test]
fn test_corrupt_file_recovers_and_next_save_repairs_it() {
    let path = temp_path("repair");
    fs::write(&path, b"\xff\xfenot even text").unwrap();

    let store = ScoreStore::new(&path);
    let mut ledger = store.load();
    assert!(ledger.is_empty());

    ledger.record(BoardSize::Four, 2, 42);
    store.save(&ledger).unwrap();
    assert_eq!(store.load(), ledger);

    let _ = fs::remove_file(&path);
}
