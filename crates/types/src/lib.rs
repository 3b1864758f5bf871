//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, UI rendering, persistence).
//!
//! # Board Catalog
//!
//! A round is played on one of four fixed board sizes (total tile count, always
//! even so every tile has exactly one partner):
//!
//! | Size | Pairs | Grid | Difficulty |
//! |------|-------|------|------------|
//! | 4    | 2     | 2×2  | Easy       |
//! | 12   | 6     | 4×3  | Medium     |
//! | 24   | 12    | 6×4  | Hard       |
//! | 48   | 24    | 8×6  | Expert     |
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SETTLE_DELAY_MS` | 1200 | Delay before a mismatched pair flips back down |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{BoardSize, GameAction};
//!
//! let size = BoardSize::from_tile_count(12).unwrap();
//! assert_eq!(size.pair_count(), 6);
//! assert_eq!(size.difficulty(), "Medium");
//!
//! let action = GameAction::from_str("flip").unwrap();
//! assert_eq!(action, GameAction::Flip);
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay before a mismatched pair is turned face-down again (1.2 seconds).
///
/// Rounds take this as their default; it is tunable per round for tests.
pub const SETTLE_DELAY_MS: u32 = 1200;

/// Maximum number of retained score entries per board size.
pub const SCOREBOARD_CAP: usize = 10;

/// Board position of a tile, stable for the whole round.
///
/// Tiles never move after the initial shuffle, so a tile's index in the layout
/// doubles as its identity.
pub type TileId = usize;

/// The four supported board sizes (total tile count per round)
///
/// The catalog is closed: every other count is rejected at round construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BoardSize {
    Four,
    Twelve,
    TwentyFour,
    FortyEight,
}

impl BoardSize {
    /// All supported sizes, smallest first.
    pub const ALL: [BoardSize; 4] = [
        BoardSize::Four,
        BoardSize::Twelve,
        BoardSize::TwentyFour,
        BoardSize::FortyEight,
    ];

    /// Total number of tiles on the board.
    pub fn tile_count(&self) -> usize {
        match self {
            BoardSize::Four => 4,
            BoardSize::Twelve => 12,
            BoardSize::TwentyFour => 24,
            BoardSize::FortyEight => 48,
        }
    }

    /// Number of image identifiers needed for a round (half the tile count).
    pub fn pair_count(&self) -> usize {
        self.tile_count() / 2
    }

    /// Grid columns used for presentation (rows follow from the tile count).
    pub fn grid_columns(&self) -> usize {
        match self {
            BoardSize::Four => 2,
            BoardSize::Twelve => 4,
            BoardSize::TwentyFour => 6,
            BoardSize::FortyEight => 8,
        }
    }

    /// Grid rows used for presentation.
    pub fn grid_rows(&self) -> usize {
        self.tile_count() / self.grid_columns()
    }

    /// Human-facing label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            BoardSize::Four => "4 Cards",
            BoardSize::Twelve => "12 Cards",
            BoardSize::TwentyFour => "24 Cards",
            BoardSize::FortyEight => "48 Cards",
        }
    }

    /// Human-facing difficulty tag for menus.
    pub fn difficulty(&self) -> &'static str {
        match self {
            BoardSize::Four => "Easy",
            BoardSize::Twelve => "Medium",
            BoardSize::TwentyFour => "Hard",
            BoardSize::FortyEight => "Expert",
        }
    }

    /// Look up a size by raw tile count.
    ///
    /// This is the membership check for counts arriving from outside the type
    /// system (persisted files, user input).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::BoardSize;
    ///
    /// assert_eq!(BoardSize::from_tile_count(24), Some(BoardSize::TwentyFour));
    /// assert_eq!(BoardSize::from_tile_count(16), None);
    /// ```
    pub fn from_tile_count(count: usize) -> Option<Self> {
        match count {
            4 => Some(BoardSize::Four),
            12 => Some(BoardSize::Twelve),
            24 => Some(BoardSize::TwentyFour),
            48 => Some(BoardSize::FortyEight),
            _ => None,
        }
    }

    /// Parse a size from its decimal string form.
    pub fn from_str(s: &str) -> Option<Self> {
        s.trim().parse::<usize>().ok().and_then(Self::from_tile_count)
    }

    /// Decimal string form, matching the persisted representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardSize::Four => "4",
            BoardSize::Twelve => "12",
            BoardSize::TwentyFour => "24",
            BoardSize::FortyEight => "48",
        }
    }
}

/// Game actions that can be applied during a round
///
/// These are produced by the input layer and routed to the engine or the
/// surrounding screen logic. Board-size selection and quitting are handled
/// separately by the menu layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the selection cursor one card left
    CursorLeft,
    /// Move the selection cursor one card right
    CursorRight,
    /// Move the selection cursor one card up
    CursorUp,
    /// Move the selection cursor one card down
    CursorDown,
    /// Flip the card under the cursor
    Flip,
    /// Abandon the current round and deal a fresh layout
    NewRound,
    /// Leave the round and return to the setup screen
    ToMenu,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("cursorLeft"), Some(GameAction::CursorLeft));
    /// assert_eq!(GameAction::from_str("newRound"), Some(GameAction::NewRound));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "flip" => Some(GameAction::Flip),
            "newround" => Some(GameAction::NewRound),
            "tomenu" => Some(GameAction::ToMenu),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::CursorUp => "cursorUp",
            GameAction::CursorDown => "cursorDown",
            GameAction::Flip => "flip",
            GameAction::NewRound => "newRound",
            GameAction::ToMenu => "toMenu",
        }
    }
}

/// Round engine states
///
/// - **Ready**: accepting flips (0 or 1 tile pending)
/// - **Resolving**: a mismatched pair is face-up; input is ignored until the
///   settle delay elapses
/// - **Complete**: every tile is matched; terminal, accepts no input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Ready,
    Resolving,
    Complete,
}

impl RoundPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundPhase::Ready => "ready",
            RoundPhase::Resolving => "resolving",
            RoundPhase::Complete => "complete",
        }
    }
}

/// Result of a single flip attempt
///
/// `Ignored` covers every silently absorbed input: a flip while resolving, a
/// flip on a face-up or matched tile, an unknown tile id, or a flip after the
/// round completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Input was absorbed without any state change.
    Ignored,
    /// First tile of a pair attempt turned face-up; no move counted yet.
    Revealed,
    /// Second tile matched the pending one; both are now locked face-up.
    Matched {
        /// True when this match completed the board.
        finished: bool,
    },
    /// Second tile did not match; the engine entered the resolving state.
    Mismatched,
}

/// Core-side event emitted when a round completes.
///
/// Emitted exactly once per round and consumed by observers, who bridge it to
/// the score ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEvent {
    pub round_id: u32,
    pub size: BoardSize,
    pub moves: u32,
}
