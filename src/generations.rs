//! Lazy generation sequence with oscillation/stability detection.

use crate::grid::{DenseGrid, Grid};
use crate::position::Pos;

/// Cycle-detecting iterator over successive generations of a grid.
///
/// Each pull applies [`Grid::next`] to the previous grid and yields the
/// result, until the living-cell configuration matches one seen earlier in
/// the run; at that point the pattern has entered a still life or a closed
/// orbit and the iterator yields `None` forever. The history is an arena of
/// configuration snapshots indexed by generation, with the most recent
/// snapshot compared against all earlier ones — O(k²) over k generations,
/// acceptable for the small generation counts this is used on.
///
/// The iterator holds no external resources; dropping it mid-run needs no
/// cleanup. Restart by constructing a new one from a fresh starting grid.
#[derive(Debug, Clone)]
pub struct Generations {
    grid: DenseGrid,
    history: Vec<Box<[Pos]>>,
}

impl Generations {
    /// Constructs the sequence starting from (but not yielding) `grid`.
    pub fn new(grid: DenseGrid) -> Self {
        let history = vec![grid.living().into_boxed_slice()];
        Self { grid, history }
    }

    /// Returns `true` if the most recent configuration already occurred
    /// earlier in the run.
    fn has_cycle(&self) -> bool {
        match self.history.split_last() {
            Some((latest, earlier)) => earlier.iter().any(|config| config == latest),
            None => false,
        }
    }
}

impl Iterator for Generations {
    type Item = DenseGrid;

    fn next(&mut self) -> Option<DenseGrid> {
        if self.has_cycle() {
            return None;
        }
        let new_grid = self.grid.next();
        self.history.push(new_grid.living().into_boxed_slice());
        self.grid = new_grid.clone();
        Some(new_grid)
    }
}

impl From<DenseGrid> for Generations {
    fn from(grid: DenseGrid) -> Self {
        Self::new(grid)
    }
}
