//! Grid coordinates and toroidal addressing.

use std::ops::Add;

use itertools::Itertools;

/// Position of a cell, not necessarily within the bounds of any grid.
///
/// Positions are normalized modulo the grid's dimensions on every access, so
/// negative and out-of-range coordinates are meaningful: on a 5×5 grid,
/// `(-1, 7)` addresses the cell at `(4, 2)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    /// Row coordinate.
    pub row: i64,
    /// Column coordinate.
    pub col: i64,
}

impl Pos {
    /// Constructs a position from row and column coordinates.
    #[inline]
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

impl From<(i64, i64)> for Pos {
    #[inline]
    fn from((row, col): (i64, i64)) -> Self {
        Self { row, col }
    }
}

impl Add for Pos {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

/// Dimensions of a grid; both axes are nonzero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridSize {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl GridSize {
    /// Constructs a size from row and column counts.
    ///
    /// Validation happens at grid construction, not here.
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns the total number of cells.
    #[inline]
    pub fn count(self) -> usize {
        self.rows * self.cols
    }

    /// Wraps a position onto the torus, returning in-bounds row and column
    /// indices. Total for every integer position, including negatives.
    #[inline]
    pub fn wrap(self, pos: Pos) -> (usize, usize) {
        let row = pos.row.rem_euclid(self.rows as i64) as usize;
        let col = pos.col.rem_euclid(self.cols as i64) as usize;
        (row, col)
    }

    /// Returns the normalized form of a position as a `Pos`.
    #[inline]
    pub fn normalize(self, pos: Pos) -> Pos {
        let (row, col) = self.wrap(pos);
        Pos::new(row as i64, col as i64)
    }

    /// Returns an iterator over every in-bounds position in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Pos> {
        (0..self.rows as i64)
            .cartesian_product(0..self.cols as i64)
            .map(Pos::from)
    }

    /// Returns the index into a flat row-major array for an (already
    /// wrapped) position.
    #[inline]
    pub(crate) fn flatten_idx(self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_wrap() {
        let size = GridSize::new(5, 3);
        assert_eq!((0, 0), size.wrap(Pos::new(0, 0)));
        assert_eq!((4, 2), size.wrap(Pos::new(-1, -1)));
        assert_eq!((0, 1), size.wrap(Pos::new(5, 7)));
        assert_eq!((3, 0), size.wrap(Pos::new(-17, -9)));
    }

    #[test]
    fn test_positions_row_major() {
        let size = GridSize::new(2, 3);
        let positions = size.positions().collect::<Vec<_>>();
        assert_eq!(
            vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(0, 2),
                Pos::new(1, 0),
                Pos::new(1, 1),
                Pos::new(1, 2),
            ],
            positions,
        );
    }

    proptest! {
        /// Normalization is total and idempotent, and shifting by whole
        /// grid periods never changes the addressed cell.
        #[test]
        fn test_wrap_consistent(
            row in -1000_i64..1000,
            col in -1000_i64..1000,
            rows in 1_usize..50,
            cols in 1_usize..50,
            k in -5_i64..5,
        ) {
            let size = GridSize::new(rows, cols);
            let pos = Pos::new(row, col);
            let normalized = size.normalize(pos);
            prop_assert_eq!(size.wrap(pos), size.wrap(normalized));
            prop_assert_eq!(normalized, size.normalize(normalized));
            let shifted = Pos::new(
                row + k * rows as i64,
                col + k * cols as i64,
            );
            prop_assert_eq!(size.wrap(pos), size.wrap(shifted));
        }
    }
}
