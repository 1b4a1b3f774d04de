//! Symbol catalog - character art for every symbol.
//!
//! Each glyph owns one or more frames (animation steps). All frames share one
//! block size, taken from the blank symbol when the catalog is built.

use std::collections::HashMap;
use std::fmt;

use crate::error::{LevelError, Result};
use crate::transform::BlockSize;
use crate::types::{symbols, Death};

/// Key of a glyph in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphKey {
    /// Art for an action-map symbol.
    Cell(char),
    /// Overlay painted where the player died.
    Death(Death),
}

impl From<char> for GlyphKey {
    fn from(c: char) -> Self {
        GlyphKey::Cell(c)
    }
}

impl From<Death> for GlyphKey {
    fn from(death: Death) -> Self {
        GlyphKey::Death(death)
    }
}

impl fmt::Display for GlyphKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphKey::Cell(c) => write!(f, "{:?}", c),
            GlyphKey::Death(death) => write!(f, "{:?} overlay", death),
        }
    }
}

/// One block of character art, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Frame {
    /// Build a frame from text rows.
    ///
    /// Returns `None` when the rows differ in length.
    pub fn from_rows(lines: &[&str]) -> Option<Self> {
        let cols = lines.first().map_or(0, |l| l.chars().count());
        let mut cells = Vec::with_capacity(cols * lines.len());
        for line in lines {
            let before = cells.len();
            cells.extend(line.chars());
            if cells.len() - before != cols {
                return None;
            }
        }
        Some(Self {
            rows: lines.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Iterate the frame one row at a time.
    pub fn lines(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.cols.max(1))
    }
}

/// All glyphs known to the game.
#[derive(Debug, Clone)]
pub struct SymbolCatalog {
    block: BlockSize,
    glyphs: HashMap<GlyphKey, Vec<Frame>>,
}

impl SymbolCatalog {
    /// Build a catalog from text art.
    ///
    /// The blank symbol's first frame fixes the block size; every other frame
    /// must match it.
    pub fn from_art(art: &[(GlyphKey, &[&[&str]])]) -> Result<Self> {
        let block = art
            .iter()
            .find(|(key, _)| *key == GlyphKey::Cell(symbols::BLANK))
            .and_then(|(_, frames)| frames.first())
            .map(|lines| {
                BlockSize::new(lines.len(), lines.first().map_or(0, |l| l.chars().count()))
            })
            .ok_or(LevelError::MissingBlank)?;

        let mut glyphs = HashMap::with_capacity(art.len());
        for &(key, frames) in art {
            if frames.is_empty() {
                return Err(LevelError::EmptyGlyph(key));
            }

            let mut parsed = Vec::with_capacity(frames.len());
            for (index, lines) in frames.iter().enumerate() {
                let frame = Frame::from_rows(lines).filter(|f| {
                    f.rows() == block.rows && f.cols() == block.cols
                });
                match frame {
                    Some(frame) => parsed.push(frame),
                    None => {
                        let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
                        return Err(LevelError::FrameSize {
                            key,
                            frame: index,
                            expected: (block.rows, block.cols),
                            actual: (lines.len(), widest),
                        });
                    }
                }
            }
            glyphs.insert(key, parsed);
        }

        if block.rows == 0 || block.cols == 0 {
            return Err(LevelError::EmptyGlyph(GlyphKey::Cell(symbols::BLANK)));
        }

        Ok(Self { block, glyphs })
    }

    pub fn block(&self) -> BlockSize {
        self.block
    }

    pub fn contains(&self, key: GlyphKey) -> bool {
        self.glyphs.contains_key(&key)
    }

    /// Number of animation frames for `key` (0 when unknown).
    pub fn frame_count(&self, key: GlyphKey) -> usize {
        self.glyphs.get(&key).map_or(0, Vec::len)
    }

    /// Frame `index` of `key`, cycling when `index` exceeds the frame count.
    pub fn frame(&self, key: GlyphKey, index: usize) -> Option<&Frame> {
        let frames = self.glyphs.get(&key)?;
        frames.get(index % frames.len())
    }

    /// Fail unless every key is present.
    pub fn require(&self, keys: impl IntoIterator<Item = GlyphKey>) -> Result<()> {
        for key in keys {
            if !self.contains(key) {
                return Err(LevelError::MissingGlyph(key));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLANK: &[&str] = &["  ", "  "];
    const BOX_A: &[&str] = &["ab", "cd"];
    const BOX_B: &[&str] = &["AB", "CD"];

    #[test]
    fn test_block_size_comes_from_blank() {
        let catalog = SymbolCatalog::from_art(&[
            (GlyphKey::Cell('x'), &[BOX_A]),
            (GlyphKey::Cell(' '), &[BLANK]),
        ])
        .unwrap();
        assert_eq!(catalog.block(), BlockSize::new(2, 2));
    }

    #[test]
    fn test_frames_cycle_past_count() {
        let catalog = SymbolCatalog::from_art(&[
            (GlyphKey::Cell(' '), &[BLANK]),
            (GlyphKey::Cell('x'), &[BOX_A, BOX_B]),
        ])
        .unwrap();
        let key = GlyphKey::Cell('x');
        assert_eq!(catalog.frame_count(key), 2);
        assert_eq!(catalog.frame(key, 1).unwrap().get(0, 0), Some('A'));
        assert_eq!(catalog.frame(key, 2).unwrap().get(0, 0), Some('a'));
        assert!(catalog.frame(GlyphKey::Cell('?'), 0).is_none());
    }

    #[test]
    fn test_missing_blank_is_rejected() {
        let err = SymbolCatalog::from_art(&[(GlyphKey::Cell('x'), &[BOX_A])]).unwrap_err();
        assert_eq!(err, LevelError::MissingBlank);
    }

    #[test]
    fn test_mismatched_frame_is_rejected() {
        let wide: &[&str] = &["abc", "def"];
        let err = SymbolCatalog::from_art(&[
            (GlyphKey::Cell(' '), &[BLANK]),
            (GlyphKey::Cell('x'), &[BOX_A, wide]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            LevelError::FrameSize {
                key: GlyphKey::Cell('x'),
                frame: 1,
                expected: (2, 2),
                actual: (2, 3),
            }
        );
    }

    #[test]
    fn test_empty_glyph_is_rejected() {
        let err = SymbolCatalog::from_art(&[
            (GlyphKey::Cell(' '), &[BLANK]),
            (GlyphKey::Death(Death::Drowned), &[]),
        ])
        .unwrap_err();
        assert_eq!(err, LevelError::EmptyGlyph(GlyphKey::Death(Death::Drowned)));
    }

    #[test]
    fn test_frames_count_chars_not_bytes() {
        let snake: &[&str] = &["⦢ ", " ⦥"];
        let catalog = SymbolCatalog::from_art(&[
            (GlyphKey::Cell(' '), &[BLANK]),
            (GlyphKey::Cell('s'), &[snake]),
        ])
        .unwrap();
        let frame = catalog.frame(GlyphKey::Cell('s'), 0).unwrap();
        assert_eq!(frame.get(1, 1), Some('⦥'));
    }
}
