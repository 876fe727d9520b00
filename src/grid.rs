//! Grid storage and the capability trait shared by grid representations.

use std::fmt;

use thiserror::Error;

use crate::cell::CellState;
use crate::position::{GridSize, Pos};
use crate::rule;
use crate::stats::GridStats;

/// Result type returned by fallible grid routines.
pub type GridResult<T> = Result<T, GridError>;

/// Error encountered constructing or reconfiguring a grid.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum GridError {
    /// Rows or columns were zero. Never silently clamped to a default.
    #[error("invalid grid dimensions: {rows}x{cols}")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
}

/// Capability set of a toroidal Game-of-Life grid.
///
/// Alternative storage layouts (sparse set, bitset) can satisfy this trait;
/// [`DenseGrid`] is the one provided here. All position arguments are
/// unnormalized and wrapped onto the torus before indexing, so `get` and
/// `set` are total.
pub trait Grid: Sized {
    /// Returns the dimensions of the grid, fixed for its lifetime.
    fn size(&self) -> GridSize;
    /// Returns the statistics snapshot describing the current contents.
    fn stats(&self) -> GridStats;
    /// Returns the state of the cell addressed by `pos`.
    fn get(&self, pos: Pos) -> CellState;
    /// Sets the state of the cell addressed by `pos`.
    fn set(&mut self, pos: Pos, state: CellState);
    /// Computes the following generation. Pure: `self` is unchanged, and the
    /// new grid's stats describe only the new grid's contents.
    fn next(&self) -> Self;

    /// Returns `true` if the cell addressed by `pos` is alive.
    #[inline]
    fn is_alive(&self, pos: Pos) -> bool {
        self.get(pos).is_alive()
    }

    /// Sets every cell to `Empty`.
    fn reset(&mut self) {
        for pos in self.size().positions() {
            self.set(pos, CellState::Empty);
        }
    }

    /// Bulk-sets the given (unnormalized) positions to the given state.
    fn set_positions(&mut self, positions: &[Pos], state: CellState) {
        for &pos in positions {
            self.set(pos, state);
        }
    }

    /// Returns the positions of all living cells in row-major order.
    ///
    /// This sorted list is the grid's "configuration," used as its identity
    /// for cycle detection.
    fn living(&self) -> Vec<Pos> {
        self.size()
            .positions()
            .filter(|&pos| self.is_alive(pos))
            .collect()
    }
}

/// Dense toroidal grid: a flat row-major array of cell states plus a
/// statistics snapshot kept in sync with the array at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGrid {
    size: GridSize,
    cells: Box<[CellState]>,
    stats: GridStats,
}

impl DenseGrid {
    /// Constructs an all-empty grid.
    ///
    /// Returns `GridError::InvalidDimensions` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> GridResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let size = GridSize::new(rows, cols);
        Ok(Self {
            size,
            cells: vec![CellState::Empty; size.count()].into_boxed_slice(),
            stats: GridStats::all_empty(size),
        })
    }

    /// Constructs a grid by applying `initializer` to every position in
    /// row-major order, accumulating stats along the way.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut initializer: impl FnMut(Pos) -> CellState,
    ) -> GridResult<Self> {
        let mut ret = Self::new(rows, cols)?;
        let mut stats = GridStats::default();
        for (idx, pos) in ret.size.positions().enumerate() {
            let state = initializer(pos);
            stats.record(state);
            ret.cells[idx] = state;
        }
        ret.stats = stats;
        Ok(ret)
    }

    /// Initializer seeding the classic 5-cell glider in the top-left corner.
    pub fn glider_initializer(pos: Pos) -> CellState {
        match (pos.row, pos.col) {
            (0, 1) | (1, 2) | (2, 0) | (2, 1) | (2, 2) => CellState::Alive,
            _ => CellState::Empty,
        }
    }

    #[inline]
    fn idx(&self, pos: Pos) -> usize {
        let (row, col) = self.size.wrap(pos);
        self.size.flatten_idx(row, col)
    }
}

impl Grid for DenseGrid {
    #[inline]
    fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    fn stats(&self) -> GridStats {
        self.stats
    }

    #[inline]
    fn get(&self, pos: Pos) -> CellState {
        self.cells[self.idx(pos)]
    }

    #[inline]
    fn set(&mut self, pos: Pos, state: CellState) {
        let idx = self.idx(pos);
        self.stats.unrecord(self.cells[idx]);
        self.stats.record(state);
        self.cells[idx] = state;
    }

    fn next(&self) -> Self {
        let mut stats = GridStats::default();
        let cells = self
            .size
            .positions()
            .map(|pos| {
                let state = rule::next_state(self, pos);
                stats.record(state);
                state
            })
            .collect::<Box<[_]>>();
        Self {
            size: self.size,
            cells,
            stats,
        }
    }

    fn reset(&mut self) {
        for cell in &mut *self.cells {
            *cell = CellState::Empty;
        }
        self.stats = GridStats::all_empty(self.size);
    }
}

impl fmt::Display for DenseGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size.rows as i64 {
            for col in 0..self.size.cols as i64 {
                let ch = if self.is_alive(Pos::new(row, col)) {
                    '*'
                } else {
                    ' '
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
