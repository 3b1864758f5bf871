//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a simple framebuffer that is flushed to a terminal backend in one
//! write per frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the views pure (framebuffer in, framebuffer out)
//! - Precise control over the card grid layout per board size

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, MenuView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
