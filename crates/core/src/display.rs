//! Display buffer - the full character-art rendering of the world.
//!
//! Each action-map cell occupies one block of characters. Painting wraps
//! horizontally (entities slide off one edge and onto the other) but never
//! vertically.

use std::ops::Range;

use crate::action_map::ActionMap;
use crate::catalog::{Frame, GlyphKey, SymbolCatalog};
use crate::transform::DisplayPos;

/// 2D buffer of display characters, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl DisplayBuffer {
    /// Blank buffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    /// Expand every action-map symbol into its first frame.
    ///
    /// Symbols missing from the catalog render as blanks; callers validate
    /// the map against the catalog before building a game.
    pub fn rebuild(actions: &ActionMap, catalog: &SymbolCatalog) -> Self {
        let block = catalog.block();
        let mut buffer = Self::new(actions.cols() * block.cols, actions.rows() * block.rows);
        for row in 0..actions.rows() {
            for (col, &symbol) in actions.row(row).iter().enumerate() {
                if let Some(frame) = catalog.frame(GlyphKey::Cell(symbol), 0) {
                    buffer.paint(frame, DisplayPos::new(row * block.rows, col * block.cols));
                }
            }
        }
        buffer
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn idx(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.idx(row, col).map(|i| self.cells[i])
    }

    /// Copy `frame` with its top-left corner at `pos`.
    ///
    /// Columns past the right edge wrap to the left edge; rows past the
    /// bottom are dropped.
    pub fn paint(&mut self, frame: &Frame, pos: DisplayPos) {
        if self.width == 0 {
            return;
        }
        for (dy, line) in frame.lines().enumerate() {
            let row = pos.row + dy;
            if row >= self.height {
                break;
            }
            let base = row * self.width;
            for (dx, &ch) in line.iter().enumerate() {
                let col = (pos.col + dx) % self.width;
                self.cells[base + col] = ch;
            }
        }
    }

    /// The sub-rectangle `rows x cols` as text, one string per row.
    ///
    /// Ranges are clamped to the buffer.
    pub fn window(&self, rows: Range<usize>, cols: Range<usize>) -> Vec<String> {
        let rows = clamp(rows, self.height);
        let cols = clamp(cols, self.width);
        rows.map(|r| {
            let base = r * self.width;
            self.cells[base + cols.start..base + cols.end].iter().collect()
        })
        .collect()
    }
}

fn clamp(range: Range<usize>, len: usize) -> Range<usize> {
    let end = range.end.min(len);
    range.start.min(end)..end
}
