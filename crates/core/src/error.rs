//! Errors raised while loading a level.

use thiserror::Error;

use crate::catalog::GlyphKey;

/// Problems with the map or symbol art handed to the game.
///
/// Deaths are not errors; these only occur before the first tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("map has no rows")]
    EmptyMap,

    #[error("map row {row} has {actual} cells, expected {expected}")]
    RaggedMap {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("symbol catalog has no blank glyph to size blocks from")]
    MissingBlank,

    #[error("glyph {0} has no frames")]
    EmptyGlyph(GlyphKey),

    #[error("glyph {key} frame {frame} is {actual:?}, expected {expected:?} (rows, cols)")]
    FrameSize {
        key: GlyphKey,
        frame: usize,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("glyph {0} is used but not in the catalog")]
    MissingGlyph(GlyphKey),

    #[error("map has no player symbol {0:?}")]
    MissingPlayer(char),
}

pub type Result<T> = std::result::Result<T, LevelError>;
