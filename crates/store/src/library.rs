//! Image library: supplies the opaque pair identifiers for a round.
//!
//! The engine never interprets these strings; they only need to be distinct.
//! Players can point `MEMORY_IMAGES_PATH` at a file with one identifier per
//! line (file names, URLs, anything); otherwise the built-in emoji deck is
//! used, which renders nicely in a terminal.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};

use crate::core::SimpleRng;
use crate::types::BoardSize;

/// Environment variable pointing at a custom identifier file.
pub const IMAGES_PATH_ENV: &str = "MEMORY_IMAGES_PATH";

/// Built-in deck: 32 single-codepoint emoji, enough for the largest board
/// (48 tiles = 24 pairs).
const BUILTIN_DECK: [&str; 32] = [
    "🍎", "🍌", "🍇", "🍒", "🍋", "🍉", "🍓", "🍑", "🥥", "🥝", "🍊", "🍍", "🥕", "🌽", "🥦",
    "🍪", "🍆", "🥔", "🍄", "🧀", "🥨", "🍿", "🍩", "🍰", "🧁", "🍫", "🍯", "🍭", "🍡", "🍕",
    "🍔", "🌮",
];

/// A pool of image identifiers to deal rounds from.
#[derive(Debug, Clone)]
pub struct ImageLibrary {
    images: Vec<String>,
}

impl ImageLibrary {
    /// The built-in emoji deck.
    pub fn builtin() -> Self {
        Self {
            images: BUILTIN_DECK.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Load identifiers from a file, one per line, blank lines skipped.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading image list {}", path.display()))?;
        let images: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        ensure!(!images.is_empty(), "image list {} is empty", path.display());
        Ok(Self { images })
    }

    /// Resolve from `MEMORY_IMAGES_PATH`, falling back to the built-in deck
    /// when unset or unreadable.
    pub fn from_env() -> Self {
        match std::env::var(IMAGES_PATH_ENV) {
            Ok(path) => match Self::from_file(&path) {
                Ok(library) => library,
                Err(err) => {
                    log::warn!("{err:#}; using the built-in deck");
                    Self::builtin()
                }
            },
            Err(_) => Self::builtin(),
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// True when the pool holds enough distinct identifiers for `size`.
    pub fn can_supply(&self, size: BoardSize) -> bool {
        self.images.len() >= size.pair_count()
    }

    /// Pick the identifiers for one round: a shuffled draw of
    /// `size.pair_count()` distinct entries. `None` when the pool is too
    /// small for the requested board.
    pub fn pick(&self, size: BoardSize, rng: &mut SimpleRng) -> Option<Vec<String>> {
        if !self.can_supply(size) {
            return None;
        }
        let mut picks = rng.shuffled(&self.images);
        picks.truncate(size.pair_count());
        Some(picks)
    }
}

impl Default for ImageLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_deck_covers_every_board_size() {
        let library = ImageLibrary::builtin();
        for size in BoardSize::ALL {
            assert!(library.can_supply(size), "{size:?}");
        }
    }

    #[test]
    fn pick_returns_distinct_identifiers() {
        let library = ImageLibrary::builtin();
        let mut rng = SimpleRng::new(5);

        let picks = library.pick(BoardSize::FortyEight, &mut rng).unwrap();
        assert_eq!(picks.len(), 24);

        let mut sorted = picks.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), picks.len());
    }

    #[test]
    fn pick_refuses_undersized_pools() {
        let library = ImageLibrary {
            images: vec!["a".to_string(), "b".to_string()],
        };
        let mut rng = SimpleRng::new(5);

        assert!(library.pick(BoardSize::Four, &mut rng).is_some());
        assert!(library.pick(BoardSize::Twelve, &mut rng).is_none());
    }

    #[test]
    fn from_file_skips_blank_lines() {
        let mut path = std::env::temp_dir();
        path.push(format!("tui-memory-images-{}", std::process::id()));
        fs::write(&path, "one\n\n  two  \nthree\n").unwrap();

        let library = ImageLibrary::from_file(&path).unwrap();
        assert_eq!(library.len(), 3);
        let _ = fs::remove_file(&path);
    }
}
