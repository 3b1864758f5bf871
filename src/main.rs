//! Terminal memory game runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input and a
//! framebuffer-based renderer, and bridges the round engine to the persisted
//! score ledger: scores load at startup, and every completed round (and every
//! reset) is written back through the store.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use tui_memory::core::{Round, RoundSnapshot, ScoreLedger, SimpleRng};
use tui_memory::input::{handle_key_event, handle_size_key, should_quit};
use tui_memory::store::{ImageLibrary, ScoreStore};
use tui_memory::term::{GameView, MenuView, TerminalRenderer, Viewport};
use tui_memory::types::{BoardSize, GameAction, TileId, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

enum Screen {
    Menu,
    Playing(Round),
}

struct App {
    screen: Screen,
    cursor: TileId,
    selected_size: BoardSize,
    ledger: ScoreLedger,
    store: ScoreStore,
    library: ImageLibrary,
    rng: SimpleRng,
}

impl App {
    fn new() -> Self {
        let store = ScoreStore::from_env();
        let ledger = store.load();
        Self {
            screen: Screen::Menu,
            cursor: 0,
            selected_size: BoardSize::Twelve,
            ledger,
            store,
            library: ImageLibrary::from_env(),
            rng: SimpleRng::new(entropy_seed()),
        }
    }

    fn start_round(&mut self, size: BoardSize) -> Result<()> {
        let Some(images) = self.library.pick(size, &mut self.rng) else {
            // Pool too small for this board; stay on the menu.
            return Ok(());
        };
        let round = Round::new(images, size, self.rng.next_u32())?;
        self.selected_size = size;
        self.cursor = 0;
        self.screen = Screen::Playing(round);
        Ok(())
    }

    fn reset_scores(&mut self) -> Result<()> {
        self.ledger.reset(None);
        self.store.save(&self.ledger)
    }
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut app = App::new();
    let game_view = GameView::default();
    let menu_view = MenuView;
    let mut snap = RoundSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let fb = match &app.screen {
            Screen::Menu => menu_view.render(app.selected_size, &app.ledger, viewport),
            Screen::Playing(round) => {
                round.snapshot_into(&mut snap);
                game_view.render(&snap, app.cursor, app.ledger.scores(round.size()), viewport)
            }
        };
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    handle_key(&mut app, key)?;
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let Screen::Playing(round) = &mut app.screen {
                round.tick(TICK_MS);
            }
        }
    }
}

fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> Result<()> {
    if matches!(app.screen, Screen::Menu) {
        if let Some(size) = handle_size_key(key) {
            app.start_round(size)?;
        } else if key.code == KeyCode::Char('x') {
            app.reset_scores()?;
        } else if let Some(action) = handle_key_event(key) {
            menu_action(app, action)?;
        }
    } else if let Some(action) = handle_key_event(key) {
        round_action(app, action)?;
    }
    Ok(())
}

fn round_action(app: &mut App, action: GameAction) -> Result<()> {
    let Screen::Playing(round) = &mut app.screen else {
        return Ok(());
    };
    let size = round.size();

    match action {
        GameAction::Flip => {
            round.flip(app.cursor);
            if let Some(done) = round.take_last_event() {
                app.ledger.record(done.size, done.moves, unix_time_ms());
                app.store.save(&app.ledger)?;
            }
        }
        GameAction::NewRound => {
            round.restart();
            app.cursor = 0;
        }
        GameAction::ToMenu => {
            // Dropping the round cancels any pending settle along with it.
            app.screen = Screen::Menu;
            app.cursor = 0;
        }
        _ => app.cursor = step_cursor(app.cursor, action, size),
    }
    Ok(())
}

fn menu_action(app: &mut App, action: GameAction) -> Result<()> {
    let sizes = BoardSize::ALL;
    let index = sizes
        .iter()
        .position(|s| *s == app.selected_size)
        .unwrap_or(0);

    match action {
        GameAction::CursorUp | GameAction::CursorLeft => {
            app.selected_size = sizes[(index + sizes.len() - 1) % sizes.len()];
        }
        GameAction::CursorDown | GameAction::CursorRight => {
            app.selected_size = sizes[(index + 1) % sizes.len()];
        }
        GameAction::Flip => {
            let size = app.selected_size;
            app.start_round(size)?;
        }
        _ => {}
    }
    Ok(())
}

/// Move the selection cursor one card, wrapping within the grid.
fn step_cursor(cursor: TileId, action: GameAction, size: BoardSize) -> TileId {
    let cols = size.grid_columns();
    let count = size.tile_count();
    let col = cursor % cols;

    match action {
        GameAction::CursorLeft => {
            if col == 0 {
                cursor + cols - 1
            } else {
                cursor - 1
            }
        }
        GameAction::CursorRight => {
            if col == cols - 1 {
                cursor - (cols - 1)
            } else {
                cursor + 1
            }
        }
        GameAction::CursorUp => (cursor + count - cols) % count,
        GameAction::CursorDown => (cursor + cols) % count,
        _ => cursor,
    }
}

fn unix_time_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn entropy_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_within_rows_and_columns() {
        let size = BoardSize::Twelve; // 4 columns, 3 rows

        assert_eq!(step_cursor(0, GameAction::CursorLeft, size), 3);
        assert_eq!(step_cursor(3, GameAction::CursorRight, size), 0);
        assert_eq!(step_cursor(1, GameAction::CursorUp, size), 9);
        assert_eq!(step_cursor(9, GameAction::CursorDown, size), 1);
        assert_eq!(step_cursor(5, GameAction::CursorRight, size), 6);
    }
}
