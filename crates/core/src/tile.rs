//! Tile model: one card instance on the board.

use tui_memory_types::TileId;

/// One face-down/face-up card.
///
/// Exactly two tiles in a round share a pair key. A matched tile is always
/// face-up; there is no way back once a pair resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    pair: usize,
    image: String,
    face_up: bool,
    matched: bool,
}

impl Tile {
    pub(crate) fn new(id: TileId, pair: usize, image: String) -> Self {
        Self {
            id,
            pair,
            image,
            face_up: false,
            matched: false,
        }
    }

    /// Board position, stable for the whole round.
    pub fn id(&self) -> TileId {
        self.id
    }

    /// Index of the source image slot; shared by exactly two tiles.
    pub fn pair_key(&self) -> usize {
        self.pair
    }

    /// The opaque image identifier this tile shows when face-up.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn is_matched(&self) -> bool {
        self.matched
    }

    pub(crate) fn reveal(&mut self) {
        self.face_up = true;
    }

    pub(crate) fn conceal(&mut self) {
        debug_assert!(!self.matched, "matched tiles never turn face-down");
        self.face_up = false;
    }

    pub(crate) fn set_matched(&mut self) {
        debug_assert!(self.face_up, "a tile is revealed before it can match");
        self.matched = true;
        self.face_up = true;
    }
}
