//! Coordinate transform between the action map and the display buffer.
//!
//! Every action-map cell expands into one block of `rows x cols` characters.
//! Display positions always name the top-left corner of a block-sized area,
//! though moving entities pass through positions that are not block aligned.

/// Size of one glyph block in display characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockSize {
    pub rows: usize,
    pub cols: usize,
}

impl BlockSize {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

/// A cell on the action map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A character position in the display buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DisplayPos {
    pub row: usize,
    pub col: usize,
}

impl DisplayPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Maps positions between the two grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform {
    block: BlockSize,
    /// Action map width in cells.
    map_cols: usize,
}

impl Transform {
    pub fn new(block: BlockSize, map_cols: usize) -> Self {
        Self { block, map_cols }
    }

    pub fn block(&self) -> BlockSize {
        self.block
    }

    pub fn map_cols(&self) -> usize {
        self.map_cols
    }

    /// Display width of one full map row.
    pub fn display_cols(&self) -> usize {
        self.map_cols * self.block.cols
    }

    /// Top-left corner of the block that renders `cell`.
    pub fn to_display(&self, cell: Cell) -> DisplayPos {
        DisplayPos::new(cell.row * self.block.rows, cell.col * self.block.cols)
    }

    /// Nearest action-map cell for a display position.
    ///
    /// Rounds half a block up. A column that rounds past the last map column
    /// belongs to column 0, since entities wrap around the right edge.
    pub fn to_logical(&self, pos: DisplayPos) -> Cell {
        let row = (pos.row + self.block.rows / 2) / self.block.rows;
        let mut col = (pos.col + self.block.cols / 2) / self.block.cols;
        if col >= self.map_cols {
            col = 0;
        }
        Cell::new(row, col)
    }
}
