//! Per-grid and cumulative cell-state statistics.

use std::ops::{Add, AddAssign};

use crate::cell::CellState;
use crate::position::GridSize;

/// Counts of each cell state.
///
/// For a snapshot of a single grid, the four counters always sum to
/// `rows * cols`. Engine-level cumulative stats are a running sum across
/// steps and do not satisfy that per-grid invariant.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct GridStats {
    /// Number of cells that are `Empty`.
    pub num_empty: usize,
    /// Number of cells that are `Alive`.
    pub num_alive: usize,
    /// Number of cells that are `Born`.
    pub num_born: usize,
    /// Number of cells that are `Died`.
    pub num_died: usize,
}

impl GridStats {
    /// Returns the stats of an all-empty grid of the given size.
    #[inline]
    pub fn all_empty(size: GridSize) -> Self {
        Self {
            num_empty: size.count(),
            ..Self::default()
        }
    }

    /// Records one cell of the given state.
    #[inline]
    pub fn record(&mut self, state: CellState) {
        *self.counter_mut(state) += 1;
    }

    /// Removes one previously recorded cell of the given state.
    #[inline]
    pub(crate) fn unrecord(&mut self, state: CellState) {
        *self.counter_mut(state) -= 1;
    }

    /// Returns the sum of all four counters.
    #[inline]
    pub fn total(self) -> usize {
        self.num_empty + self.num_alive + self.num_born + self.num_died
    }

    #[inline]
    fn counter_mut(&mut self, state: CellState) -> &mut usize {
        match state {
            CellState::Empty => &mut self.num_empty,
            CellState::Alive => &mut self.num_alive,
            CellState::Born => &mut self.num_born,
            CellState::Died => &mut self.num_died,
        }
    }
}

impl Add for GridStats {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for GridStats {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.num_empty += rhs.num_empty;
        self.num_alive += rhs.num_alive;
        self.num_born += rhs.num_born;
        self.num_died += rhs.num_died;
    }
}
