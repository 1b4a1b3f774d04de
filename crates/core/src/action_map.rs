//! Action map - the game state at one symbol per cell.
//!
//! The action map is the source of truth for what occupies each cell. Entities
//! and the player move their symbol around it as they travel.

use crate::error::{LevelError, Result};
use crate::transform::Cell;

/// Grid of symbols, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMap {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl ActionMap {
    /// Parse a map from equal-length text rows.
    pub fn parse(lines: &[&str]) -> Result<Self> {
        let cols = match lines.first() {
            Some(first) => first.chars().count(),
            None => return Err(LevelError::EmptyMap),
        };
        if cols == 0 {
            return Err(LevelError::EmptyMap);
        }

        let mut cells = Vec::with_capacity(cols * lines.len());
        for (row, line) in lines.iter().enumerate() {
            let before = cells.len();
            cells.extend(line.chars());
            let actual = cells.len() - before;
            if actual != cols {
                return Err(LevelError::RaggedMap {
                    row,
                    expected: cols,
                    actual,
                });
            }
        }

        Ok(Self {
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

    #[inline(always)]
    fn idx(&self, cell: Cell) -> Option<usize> {
        if cell.row >= self.rows || cell.col >= self.cols {
            return None;
        }
        Some(cell.row * self.cols + cell.col)
    }

    /// Symbol at `cell`, or `None` when out of bounds.
    pub fn get(&self, cell: Cell) -> Option<char> {
        self.idx(cell).map(|i| self.cells[i])
    }

    /// Set the symbol at `cell`. Returns false if out of bounds.
    pub fn set(&mut self, cell: Cell, symbol: char) -> bool {
        match self.idx(cell) {
            Some(i) => {
                self.cells[i] = symbol;
                true
            }
            None => false,
        }
    }

    /// First cell holding `symbol`, scanning rows top to bottom.
    pub fn find(&self, symbol: char) -> Option<Cell> {
        self.cells
            .iter()
            .position(|&c| c == symbol)
            .map(|i| Cell::new(i / self.cols, i % self.cols))
    }

    /// Symbols of one row.
    pub fn row(&self, row: usize) -> &[char] {
        if row >= self.rows {
            return &[];
        }
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Every distinct symbol on the map.
    pub fn symbols(&self) -> Vec<char> {
        let mut seen: Vec<char> = Vec::new();
        for &c in &self.cells {
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        seen
    }
}
