//! Persistence module - score storage and the image library.
//!
//! Keeps all file and environment concerns out of `core`:
//!
//! - [`scores`]: the ledger read at startup and written after every
//!   record/reset (JSON, shape-compatible with what the game has always
//!   persisted)
//! - [`schema`]: the serde document types for that file
//! - [`library`]: where the opaque image identifiers for a round come from
//!
//! # Environment Variables
//!
//! - `MEMORY_SCORES_PATH`: score file location (default: `memory_scores.json`)
//! - `MEMORY_IMAGES_PATH`: custom identifier list, one per line (default:
//!   built-in emoji deck)

pub mod library;
pub mod schema;
pub mod scores;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use library::{ImageLibrary, IMAGES_PATH_ENV};
pub use schema::{ScoresFile, StoredEntry};
pub use scores::{ScoreStore, SCORES_PATH_ENV};
