//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] values plus the
//! two out-of-band inputs the menu layer owns: board-size selection and quit.

pub mod map;

pub use tui_memory_types as types;

pub use map::{handle_key_event, handle_size_key, should_quit};
