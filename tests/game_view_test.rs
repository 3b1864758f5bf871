//! Render smoke tests: views stay in bounds and show the key game facts.

use tui_memory::core::{Round, ScoreLedger};
use tui_memory::term::{FrameBuffer, GameView, MenuView, Viewport};
use tui_memory::types::BoardSize;

fn fb_text(fb: &FrameBuffer) -> String {
    let mut text = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            text.push(fb.get(x, y).unwrap().ch);
        }
        text.push('\n');
    }
    text
}

fn sample_round(size: BoardSize) -> Round {
    let images = (0..size.pair_count()).map(|i| format!("img-{i}")).collect();
    Round::new(images, size, 2024).unwrap()
}

#[test]
fn test_game_view_shows_moves_counter() {
    let mut round = sample_round(BoardSize::Four);
    // One mismatching or matching pair attempt spends a move either way.
    let first = round.tiles()[0].pair_key();
    let partner = round
        .tiles()
        .iter()
        .position(|t| t.id() != 0 && t.pair_key() == first)
        .unwrap();
    round.flip(0);
    round.flip(partner);
    assert_eq!(round.moves(), 1);

    let view = GameView::default();
    let fb = view.render(&round.snapshot(), 0, &[], Viewport::new(100, 40));
    let text = fb_text(&fb);
    assert!(text.contains("MOVES"));
    assert!(text.contains("MEMORY"));
}

#[test]
fn test_game_view_survives_tiny_viewports() {
    let round = sample_round(BoardSize::FortyEight);
    let view = GameView::default();
    for (w, h) in [(1, 1), (10, 5), (20, 10), (300, 2)] {
        let fb = view.render(&round.snapshot(), 0, &[], Viewport::new(w, h));
        assert_eq!(fb.width(), w);
        assert_eq!(fb.height(), h);
    }
}

#[test]
fn test_game_view_win_overlay() {
    let mut round = sample_round(BoardSize::Four);
    for pair in 0..2 {
        let ids: Vec<usize> = round
            .tiles()
            .iter()
            .filter(|t| t.pair_key() == pair)
            .map(|t| t.id())
            .collect();
        round.flip(ids[0]);
        round.flip(ids[1]);
    }
    assert!(round.is_complete());

    let view = GameView::default();
    let fb = view.render(&round.snapshot(), 0, &[], Viewport::new(100, 40));
    assert!(fb_text(&fb).contains("YOU WON!"));
}

#[test]
fn test_menu_view_lists_the_catalog_with_best_scores() {
    let mut ledger = ScoreLedger::new();
    ledger.record(BoardSize::Twelve, 7, 1);

    let fb = MenuView.render(BoardSize::Twelve, &ledger, Viewport::new(80, 24));
    let text = fb_text(&fb);
    for size in BoardSize::ALL {
        assert!(text.contains(size.label()), "{}", size.label());
        assert!(text.contains(size.difficulty()), "{}", size.difficulty());
    }
    assert!(text.contains("best"));
}
