//! The `{title, contents}` saved-grid record.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cell::CellState;
use crate::grid::{DenseGrid, Grid, GridError};
use crate::position::{GridSize, Pos};

/// Result type returned by fallible saved-grid routines.
pub type SavedGridResult<T> = Result<T, SavedGridError>;

/// Error encountered loading or storing a saved grid.
#[allow(missing_docs)]
#[derive(Error, Debug)]
pub enum SavedGridError {
    #[error("invalid saved-grid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// A serialized grid configuration: a title plus the `[row, col]` pairs of
/// every living cell, in row-major order.
///
/// `contents` rows are kept as raw integer lists rather than pairs so that
/// records written by other tools survive a round trip; rows that are not
/// exactly two integers long are skipped (with a warning) wherever positions
/// are needed, never treated as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridData {
    /// Display title of the configuration.
    pub title: String,
    /// `[row, col]` pair for every living cell.
    pub contents: Vec<Vec<i64>>,
}

impl GridData {
    /// Constructs a record from raw contents.
    pub fn new(title: impl Into<String>, contents: Vec<Vec<i64>>) -> Self {
        Self {
            title: title.into(),
            contents,
        }
    }

    /// Captures the living cells of `grid` under the given title.
    pub fn from_grid(title: impl Into<String>, grid: &impl Grid) -> Self {
        Self {
            title: title.into(),
            contents: grid
                .living()
                .into_iter()
                .map(|pos| vec![pos.row, pos.col])
                .collect(),
        }
    }

    /// Returns the listed positions, skipping rows that are not exactly two
    /// integers long.
    pub fn to_positions(&self) -> Vec<Pos> {
        self.contents
            .iter()
            .filter_map(|pair| match pair.as_slice() {
                &[row, col] => Some(Pos::new(row, col)),
                other => {
                    log::warn!(
                        "skipping malformed position {:?} in saved grid {:?}",
                        other,
                        self.title,
                    );
                    None
                }
            })
            .collect()
    }

    /// Maximum row coordinate across all well-formed pairs (0 if none).
    ///
    /// The x/y naming treats rows as X, matching the data this format must
    /// stay compatible with.
    pub fn max_x(&self) -> i64 {
        self.coord_max(0)
    }

    /// Maximum column coordinate across all well-formed pairs (0 if none).
    pub fn max_y(&self) -> i64 {
        self.coord_max(1)
    }

    fn coord_max(&self, axis: usize) -> i64 {
        self.contents
            .iter()
            .filter(|pair| pair.len() == 2)
            .map(|pair| pair[axis])
            .fold(0, i64::max)
    }

    /// Side length used when reconstructing a grid from this record:
    /// `floor(1.3 * max(max_x, 1.3 * max_y))`.
    ///
    /// The asymmetry between the axes is historical; it is reproduced
    /// exactly for compatibility with existing saved data.
    pub fn fitted_dimension(&self) -> usize {
        (1.3 * f64::max(self.max_x() as f64, 1.3 * self.max_y() as f64)) as usize
    }

    /// Reconstructs a grid with the listed positions alive.
    ///
    /// Non-empty records get a square grid of [`fitted_dimension`] cells per
    /// side; empty ones fall back to `default_size`. Fails with
    /// `InvalidDimensions` if the computed dimension is zero (e.g. a record
    /// whose only cell is at the origin).
    ///
    /// [`fitted_dimension`]: GridData::fitted_dimension
    pub fn to_grid(&self, default_size: GridSize) -> SavedGridResult<DenseGrid> {
        let mut grid = if self.contents.is_empty() {
            DenseGrid::new(default_size.rows, default_size.cols)?
        } else {
            let dim = self.fitted_dimension();
            DenseGrid::new(dim, dim)?
        };
        grid.set_positions(&self.to_positions(), CellState::Alive);
        Ok(grid)
    }

    /// Encodes the record as pretty-printed JSON.
    pub fn to_json(&self) -> SavedGridResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes a record from JSON.
    pub fn from_json(json: &str) -> SavedGridResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Parses a catalog: a JSON array of `{title, contents}` records, as served
/// by a remote configuration source.
pub fn parse_catalog(json: &str) -> SavedGridResult<Vec<GridData>> {
    Ok(serde_json::from_str(json)?)
}
