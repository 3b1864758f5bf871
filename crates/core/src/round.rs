//! Round engine: the per-round state machine.
//!
//! A round owns its tiles for its whole lifetime and is mutated through two
//! entry points only: [`Round::flip`] (player input) and [`Round::tick`]
//! (elapsed time). Everything a caller cannot legally do - flipping while a
//! mismatch settles, re-flipping a face-up or matched tile, flipping after the
//! round completed - is absorbed as a silent no-op, because a UI cannot
//! reliably prevent those clicks.
//!
//! Timing follows the fixed-timestep discipline of the rest of the workspace:
//! the mismatch settle delay is a countdown integrated by `tick`, not a
//! scheduled callback, so a replaced round can never be mutated by a timer
//! that outlived it.

use arrayvec::ArrayVec;
use thiserror::Error;

use tui_memory_types::{
    BoardSize, FlipOutcome, RoundEvent, RoundPhase, TileId, SETTLE_DELAY_MS,
};

use crate::rng::SimpleRng;
use crate::snapshot::{RoundSnapshot, TileSnapshot};
use crate::tile::Tile;

/// Round construction failures.
///
/// These are the only reportable errors in the engine; every in-round anomaly
/// is a no-op instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("unsupported board size: {0} tiles (supported: 4, 12, 24, 48)")]
    UnsupportedBoardSize(usize),
    #[error("a {size:?} board needs exactly {expected} images, got {supplied}")]
    ImageCountMismatch {
        size: BoardSize,
        expected: usize,
        supplied: usize,
    },
}

/// Complete state of one playthrough from shuffle to completion.
#[derive(Debug, Clone)]
pub struct Round {
    size: BoardSize,
    /// Source image identifiers; tile pair keys index into this list.
    images: Vec<String>,
    tiles: Vec<Tile>,
    /// Face-up-but-unresolved tiles (0, 1 or 2 at any instant).
    pending: ArrayVec<TileId, 2>,
    phase: RoundPhase,
    moves: u32,
    settle_delay_ms: u32,
    settle_timer_ms: u32,
    /// Bumped whenever a settle is armed or cancelled; exported in snapshots
    /// so external schedulers can discard stale deferred work.
    settle_generation: u32,
    /// Monotonic id (increments on restart).
    round_id: u32,
    rng: SimpleRng,
    /// Completion event, emitted once and consumed by observers.
    last_event: Option<RoundEvent>,
}

impl Round {
    /// Create a round from one image identifier per pair and a board size.
    ///
    /// The image count must equal `size.pair_count()`; the layout is dealt
    /// immediately with a Fisher-Yates shuffle seeded by `seed`.
    pub fn new(images: Vec<String>, size: BoardSize, seed: u32) -> Result<Self, RoundError> {
        if images.len() != size.pair_count() {
            return Err(RoundError::ImageCountMismatch {
                size,
                expected: size.pair_count(),
                supplied: images.len(),
            });
        }

        let mut round = Self {
            size,
            images,
            tiles: Vec::with_capacity(size.tile_count()),
            pending: ArrayVec::new(),
            phase: RoundPhase::Ready,
            moves: 0,
            settle_delay_ms: SETTLE_DELAY_MS,
            settle_timer_ms: 0,
            settle_generation: 0,
            round_id: 0,
            rng: SimpleRng::new(seed),
            last_event: None,
        };
        round.deal();
        Ok(round)
    }

    /// Create a round from a raw tile count, validating catalog membership.
    pub fn from_tile_count(
        images: Vec<String>,
        tile_count: usize,
        seed: u32,
    ) -> Result<Self, RoundError> {
        let size = BoardSize::from_tile_count(tile_count)
            .ok_or(RoundError::UnsupportedBoardSize(tile_count))?;
        Self::new(images, size, seed)
    }

    /// Override the mismatch settle delay (tests use short delays).
    pub fn with_settle_delay(mut self, delay_ms: u32) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }

    /// Lay out two face-down tiles per image in shuffled order.
    ///
    /// Tile ids are board positions assigned after the shuffle; tiles never
    /// move again, so ids stay valid for the whole round.
    fn deal(&mut self) {
        let mut pairs: Vec<usize> = (0..self.images.len()).flat_map(|p| [p, p]).collect();
        self.rng.shuffle(&mut pairs);

        self.tiles.clear();
        self.tiles.extend(
            pairs
                .into_iter()
                .enumerate()
                .map(|(id, pair)| Tile::new(id, pair, self.images[pair].clone())),
        );
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == RoundPhase::Complete
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The face-up-but-unresolved selection, in flip order.
    pub fn pending(&self) -> &[TileId] {
        &self.pending
    }

    /// Milliseconds left before a mismatched pair flips back down.
    pub fn settle_remaining_ms(&self) -> u32 {
        self.settle_timer_ms
    }

    pub fn settle_generation(&self) -> u32 {
        self.settle_generation
    }

    /// Take and clear the completion event.
    pub fn take_last_event(&mut self) -> Option<RoundEvent> {
        self.last_event.take()
    }

    /// Flip the tile at `tile` - the sole gameplay mutator.
    ///
    /// Returns what the flip did; [`FlipOutcome::Ignored`] means the input was
    /// absorbed without any state change (busy resolving, unknown id, tile
    /// already face-up or matched, round complete).
    pub fn flip(&mut self, tile: TileId) -> FlipOutcome {
        if self.phase != RoundPhase::Ready {
            return FlipOutcome::Ignored;
        }
        let Some(target) = self.tiles.get(tile) else {
            return FlipOutcome::Ignored;
        };
        // Covers matched tiles as well: matched implies face-up.
        if target.is_face_up() {
            return FlipOutcome::Ignored;
        }
        // Unreachable while the busy rule holds: a full selection either
        // resolved immediately (match) or moved the phase to Resolving.
        debug_assert!(self.pending.len() < 2, "selection full while Ready");
        if self.pending.is_full() {
            return FlipOutcome::Ignored;
        }

        self.tiles[tile].reveal();
        self.pending.push(tile);

        if self.pending.len() == 1 {
            // First tile of a pair attempt; the move is only spent once a
            // second tile is compared.
            return FlipOutcome::Revealed;
        }

        self.moves += 1;
        let first = self.pending[0];

        if self.tiles[first].pair_key() == self.tiles[tile].pair_key() {
            self.tiles[first].set_matched();
            self.tiles[tile].set_matched();
            self.pending.clear();

            let finished = self.tiles.iter().all(Tile::is_matched);
            if finished {
                self.phase = RoundPhase::Complete;
                self.last_event = Some(RoundEvent {
                    round_id: self.round_id,
                    size: self.size,
                    moves: self.moves,
                });
            }
            FlipOutcome::Matched { finished }
        } else {
            self.phase = RoundPhase::Resolving;
            self.settle_timer_ms = self.settle_delay_ms;
            self.settle_generation = self.settle_generation.wrapping_add(1);
            FlipOutcome::Mismatched
        }
    }

    /// Advance round timers; returns true when the state changed.
    ///
    /// Only the resolving countdown consumes time. When it elapses the
    /// mismatched pair turns face-down, the selection clears and the round is
    /// ready for input again.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != RoundPhase::Resolving {
            return false;
        }

        self.settle_timer_ms = self.settle_timer_ms.saturating_sub(elapsed_ms);
        if self.settle_timer_ms > 0 {
            return false;
        }

        while let Some(id) = self.pending.pop() {
            self.tiles[id].conceal();
        }
        self.phase = RoundPhase::Ready;
        true
    }

    /// Deal a fresh layout of the same images.
    ///
    /// Bumps `round_id` and the settle generation, so any deferred work keyed
    /// to the previous layout is invalidated. The RNG keeps advancing, so the
    /// new layout differs from a plain re-deal of the seed.
    pub fn restart(&mut self) {
        self.round_id = self.round_id.wrapping_add(1);
        self.settle_generation = self.settle_generation.wrapping_add(1);
        self.settle_timer_ms = 0;
        self.pending.clear();
        self.moves = 0;
        self.phase = RoundPhase::Ready;
        self.last_event = None;
        self.deal();
    }

    /// Write the current state into a reusable snapshot buffer.
    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        out.size = self.size;
        out.phase = self.phase;
        out.moves = self.moves;
        out.round_id = self.round_id;
        out.settle_remaining_ms = self.settle_timer_ms;
        out.settle_generation = self.settle_generation;

        out.pending = [None, None];
        for (slot, id) in out.pending.iter_mut().zip(self.pending.iter()) {
            *slot = Some(*id);
        }

        out.images.clone_from(&self.images);
        out.tiles.clear();
        out.tiles.extend(self.tiles.iter().map(|t| TileSnapshot {
            id: t.id(),
            pair: t.pair_key(),
            face_up: t.is_face_up(),
            matched: t.is_matched(),
        }));
    }

    /// Convenience helper that allocates a new snapshot.
    pub fn snapshot(&self) -> RoundSnapshot {
        let mut snap = RoundSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
