//! Key mapping from terminal events to game actions.

use crate::types::{BoardSize, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to in-round game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::CursorRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::CursorDown)
        }

        // Flip the card under the cursor
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Flip),

        // Round control
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::NewRound),
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => Some(GameAction::ToMenu),

        _ => None,
    }
}

/// Map number keys to a board size selection (menu screen).
pub fn handle_size_key(key: KeyEvent) -> Option<BoardSize> {
    match key.code {
        KeyCode::Char('1') => Some(BoardSize::Four),
        KeyCode::Char('2') => Some(BoardSize::Twelve),
        KeyCode::Char('3') => Some(BoardSize::TwentyFour),
        KeyCode::Char('4') => Some(BoardSize::FortyEight),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
