//! Toroidal Game-of-Life simulation engine.
//!
//! The grid is a fixed-size 2D torus: coordinates wrap modulo the grid's
//! dimensions, so every integer `(row, col)` pair addresses a cell and the
//! grid has no edges. Each generation applies the B3/S23 rule to every cell
//! simultaneously, tagging cells that just changed liveness with transient
//! `Born`/`Died` states so observers can distinguish new growth from stable
//! cells. On top of that sit per-generation statistics, a cycle-detecting
//! generation iterator, and an [`Engine`](engine::Engine) that external
//! drivers (UI, timers) poke to advance the simulation.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod cell;
pub mod engine;
pub mod event;
pub mod generations;
pub mod grid;
pub mod io;
pub mod position;
pub mod rule;
pub mod stats;

pub mod prelude {
    //! Re-exports of the most commonly used types.

    pub use crate::cell::CellState;
    pub use crate::engine::{Engine, EngineDelegate, SharedEngine};
    pub use crate::event::EngineEvent;
    pub use crate::generations::Generations;
    pub use crate::grid::{DenseGrid, Grid, GridError, GridResult};
    pub use crate::io::{GridData, SavedGridError};
    pub use crate::position::{GridSize, Pos};
    pub use crate::stats::GridStats;
}

#[cfg(test)]
mod tests;
