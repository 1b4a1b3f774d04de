//! Block overlap test in display space.

use crate::transform::{BlockSize, DisplayPos};

/// True when the block-sized rectangles at `a` and `b` overlap.
///
/// Each position is the top-left corner of a rectangle spanning
/// `block.rows x block.cols` characters. Spans are inclusive, so blocks that
/// share a single row and column still collide.
pub fn collides(a: DisplayPos, b: DisplayPos, block: BlockSize) -> bool {
    let rows = block.rows.saturating_sub(1);
    let cols = block.cols.saturating_sub(1);

    let rows_overlap = a.row <= b.row + rows && a.row + rows >= b.row;
    rows_overlap && a.col <= b.col + cols && a.col + cols >= b.col
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: BlockSize = BlockSize::new(4, 8);

    #[test]
    fn test_same_position_collides() {
        let p = DisplayPos::new(12, 40);
        assert!(collides(p, p, BLOCK));
    }

    #[test]
    fn test_touching_edges_collide() {
        let a = DisplayPos::new(0, 0);
        assert!(collides(a, DisplayPos::new(0, 7), BLOCK));
        assert!(collides(a, DisplayPos::new(3, 0), BLOCK));
        assert!(!collides(a, DisplayPos::new(0, 8), BLOCK));
        assert!(!collides(a, DisplayPos::new(4, 0), BLOCK));
    }

    #[test]
    fn test_adjacent_lanes_do_not_collide() {
        let car = DisplayPos::new(24, 17);
        let player = DisplayPos::new(28, 17);
        assert!(!collides(car, player, BLOCK));
    }
}
