//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the memory game: tile layout, the round
//! state machine and the score ranking. It has **zero dependencies** on UI,
//! storage, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces an identical layout
//! - **Testable**: every rule is unit-tested against scripted flip sequences
//! - **Portable**: runs in any environment (terminal, headless, server)
//!
//! # Module Structure
//!
//! - [`rng`]: LCG with an unbiased Fisher-Yates shuffle for board layout
//! - [`tile`]: one card instance (pair key, face-up, matched)
//! - [`round`]: the per-round state machine (flip, settle, win detection)
//! - [`ledger`]: capped, ascending-by-moves score history per board size
//! - [`snapshot`]: frame-ready copies of round state for the view layers
//!
//! # Game Rules
//!
//! - Two tiles share each pair key; a round holds 4, 12, 24 or 48 tiles
//! - A move is spent when the second tile of a pair attempt is revealed
//! - A match locks both tiles face-up; a mismatch shows both for a settle
//!   delay (1.2 s) during which input is ignored, then hides them again
//! - The round completes when every tile is matched; the final move count is
//!   reported exactly once
//!
//! # Example
//!
//! ```
//! use tui_memory_core::Round;
//! use tui_memory_types::{BoardSize, FlipOutcome};
//!
//! let images = vec!["sunset.png".to_string(), "harbor.png".to_string()];
//! let mut round = Round::new(images, BoardSize::Four, 12345).unwrap();
//!
//! // First flip reveals a tile without spending a move.
//! assert_eq!(round.flip(0), FlipOutcome::Revealed);
//! assert_eq!(round.moves(), 0);
//! ```
//!
//! # Timing
//!
//! The only time-based behavior is the mismatch settle delay. Call
//! [`Round::tick`](round::Round::tick) every frame with elapsed milliseconds;
//! the round itself never reads a clock.

pub mod ledger;
pub mod rng;
pub mod round;
pub mod snapshot;
pub mod tile;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use ledger::{ScoreEntry, ScoreLedger};
pub use rng::SimpleRng;
pub use round::{Round, RoundError};
pub use snapshot::{RoundSnapshot, TileSnapshot};
pub use tile::Tile;
