//! Integration tests for the round engine: scripted playthroughs against the
//! public facade API.

use tui_memory::core::{Round, RoundError, SimpleRng};
use tui_memory::types::{BoardSize, FlipOutcome, RoundPhase, TileId, SETTLE_DELAY_MS};

fn images(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("photo-{i:02}.png")).collect()
}

/// Positions of the two tiles carrying `pair`, in board order.
fn positions_of(round: &Round, pair: usize) -> (TileId, TileId) {
    let ids: Vec<TileId> = round
        .tiles()
        .iter()
        .filter(|t| t.pair_key() == pair)
        .map(|t| t.id())
        .collect();
    (ids[0], ids[1])
}

#[test]
fn test_board_of_12_needs_exactly_6_images() {
    assert!(Round::new(images(6), BoardSize::Twelve, 1).is_ok());

    for wrong in [5, 7] {
        let err = Round::new(images(wrong), BoardSize::Twelve, 1).unwrap_err();
        assert!(matches!(err, RoundError::ImageCountMismatch { .. }));
    }
}

#[test]
fn test_layout_is_a_permutation_of_the_pairs() {
    let round = Round::new(images(12), BoardSize::TwentyFour, 777).unwrap();

    let mut pairs: Vec<usize> = round.tiles().iter().map(|t| t.pair_key()).collect();
    pairs.sort_unstable();
    let expected: Vec<usize> = (0..12).flat_map(|p| [p, p]).collect();
    assert_eq!(pairs, expected);
}

#[test]
fn test_same_seed_same_layout() {
    let a = Round::new(images(6), BoardSize::Twelve, 31337).unwrap();
    let b = Round::new(images(6), BoardSize::Twelve, 31337).unwrap();

    let layout = |r: &Round| r.tiles().iter().map(|t| t.pair_key()).collect::<Vec<_>>();
    assert_eq!(layout(&a), layout(&b));
}

#[test]
fn test_scripted_round_completes_with_three_moves() {
    // Size-4 board over images [A, B]: mismatch, settle, then both pairs.
    let mut round = Round::new(
        vec!["A".to_string(), "B".to_string()],
        BoardSize::Four,
        12345,
    )
    .unwrap();
    let (a1, a2) = positions_of(&round, 0);
    let (b1, b2) = positions_of(&round, 1);

    assert_eq!(round.flip(a1), FlipOutcome::Revealed);
    assert_eq!(round.flip(b1), FlipOutcome::Mismatched);
    assert_eq!(round.phase(), RoundPhase::Resolving);

    // Wait out the settle interval.
    let mut waited = 0;
    while waited < SETTLE_DELAY_MS {
        round.tick(16);
        waited += 16;
    }
    assert_eq!(round.phase(), RoundPhase::Ready);

    assert_eq!(round.flip(a1), FlipOutcome::Revealed);
    assert_eq!(round.flip(a2), FlipOutcome::Matched { finished: false });
    assert_eq!(round.flip(b1), FlipOutcome::Revealed);
    assert_eq!(round.flip(b2), FlipOutcome::Matched { finished: true });

    assert_eq!(round.phase(), RoundPhase::Complete);
    assert_eq!(round.moves(), 3);

    let done = round.take_last_event().expect("completion event");
    assert_eq!(done.moves, 3);
    assert_eq!(done.size, BoardSize::Four);
}

#[test]
fn test_input_is_dead_during_settle() {
    let mut round = Round::new(images(2), BoardSize::Four, 9).unwrap();
    let (a1, a2) = positions_of(&round, 0);
    let (b1, _) = positions_of(&round, 1);

    round.flip(a1);
    round.flip(b1);
    assert_eq!(round.moves(), 1);

    // Mid-settle: every flip is a no-op, including on the concealed partner.
    round.tick(600);
    assert_eq!(round.flip(a2), FlipOutcome::Ignored);
    assert_eq!(round.flip(a1), FlipOutcome::Ignored);
    assert_eq!(round.moves(), 1);
    assert_eq!(round.phase(), RoundPhase::Resolving);

    // After the remainder elapses both revert and play resumes.
    round.tick(600);
    assert!(!round.tiles()[a1].is_face_up());
    assert!(!round.tiles()[b1].is_face_up());
    assert_eq!(round.flip(a2), FlipOutcome::Revealed);
}

#[test]
fn test_full_48_tile_round_is_winnable() {
    let mut round = Round::new(images(24), BoardSize::FortyEight, 4242).unwrap();

    for pair in 0..24 {
        let (first, second) = positions_of(&round, pair);
        assert_eq!(round.flip(first), FlipOutcome::Revealed);
        let finished = pair == 23;
        assert_eq!(round.flip(second), FlipOutcome::Matched { finished });
    }

    assert_eq!(round.phase(), RoundPhase::Complete);
    assert_eq!(round.moves(), 24);
}

#[test]
fn test_restart_supersedes_pending_settle() {
    let mut round = Round::new(images(2), BoardSize::Four, 55).unwrap();
    let (a1, _) = positions_of(&round, 0);
    let (b1, _) = positions_of(&round, 1);

    round.flip(a1);
    round.flip(b1);
    assert_eq!(round.phase(), RoundPhase::Resolving);

    round.restart();

    // The superseded settle never fires into the fresh layout.
    round.tick(SETTLE_DELAY_MS);
    assert_eq!(round.phase(), RoundPhase::Ready);
    assert_eq!(round.moves(), 0);
    assert_eq!(round.round_id(), 1);
    assert!(round.tiles().iter().all(|t| !t.is_face_up()));
}

#[test]
fn test_shuffler_is_pure_over_its_input() {
    let mut rng = SimpleRng::new(2718);
    let input: Vec<String> = images(10);
    let output = rng.shuffled(&input);

    assert_eq!(input, images(10));
    let mut sorted = output.clone();
    sorted.sort();
    let mut expected = input.clone();
    expected.sort();
    assert_eq!(sorted, expected);
}
