//! Render snapshots of a round.
//!
//! The view layers read these instead of the live [`crate::round::Round`];
//! callers keep one buffer and refresh it every frame via
//! [`crate::round::Round::snapshot_into`].

use tui_memory_types::{BoardSize, RoundPhase, TileId};

/// Per-tile render state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSnapshot {
    pub id: TileId,
    /// Index into [`RoundSnapshot::images`].
    pub pair: usize,
    pub face_up: bool,
    pub matched: bool,
}

/// Everything the presentation needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub size: BoardSize,
    pub tiles: Vec<TileSnapshot>,
    /// Opaque image identifiers, indexed by `TileSnapshot::pair`.
    pub images: Vec<String>,
    pub moves: u32,
    pub phase: RoundPhase,
    /// Current selection in flip order (first slot fills first).
    pub pending: [Option<TileId>; 2],
    pub settle_remaining_ms: u32,
    pub settle_generation: u32,
    pub round_id: u32,
}

impl RoundSnapshot {
    pub fn complete(&self) -> bool {
        self.phase == RoundPhase::Complete
    }

    pub fn resolving(&self) -> bool {
        self.phase == RoundPhase::Resolving
    }
}

impl Default for RoundSnapshot {
    fn default() -> Self {
        Self {
            size: BoardSize::Four,
            tiles: Vec::new(),
            images: Vec::new(),
            moves: 0,
            phase: RoundPhase::Ready,
            pending: [None, None],
            settle_remaining_ms: 0,
            settle_generation: 0,
            round_id: 0,
        }
    }
}
