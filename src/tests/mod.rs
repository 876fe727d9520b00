//! Crate-level tests exercising whole simulation runs.

mod glider;
mod saved_grids;
