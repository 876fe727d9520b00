//! The Game-of-Life transition rule (B3/S23) with transient state tags.

use crate::cell::CellState;
use crate::grid::Grid;
use crate::position::Pos;

/// The eight unit offsets of the Moore neighborhood, excluding the origin.
pub const NEIGHBOR_OFFSETS: [Pos; 8] = [
    Pos { row: -1, col: -1 },
    Pos { row: -1, col: 0 },
    Pos { row: -1, col: 1 },
    Pos { row: 0, col: -1 },
    Pos { row: 0, col: 1 },
    Pos { row: 1, col: -1 },
    Pos { row: 1, col: 0 },
    Pos { row: 1, col: 1 },
];

/// Counts the live cells among the eight toroidal neighbors of `pos`.
///
/// Each offset is wrapped independently, so on very small grids the same
/// cell may be counted through several offsets; that is the torus topology,
/// not an error.
pub fn live_neighbor_count(grid: &impl Grid, pos: Pos) -> usize {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&offset| grid.is_alive(pos + offset))
        .count()
}

/// Computes the next state of the cell at `pos`.
///
/// - 2 live neighbors and alive → stays `Alive`
/// - 3 live neighbors → `Alive` if already alive, else `Born`
/// - anything else → `Died` if alive, else `Empty`
pub fn next_state(grid: &impl Grid, pos: Pos) -> CellState {
    let alive = grid.is_alive(pos);
    match live_neighbor_count(grid, pos) {
        2 if alive => CellState::Alive,
        3 => {
            if alive {
                CellState::Alive
            } else {
                CellState::Born
            }
        }
        _ => {
            if alive {
                CellState::Died
            } else {
                CellState::Empty
            }
        }
    }
}
