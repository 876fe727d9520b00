//! Typed events emitted by the engine.

use crate::grid::DenseGrid;

/// Event broadcast to engine observers.
///
/// One variant per event kind, each carrying the grid it concerns by shared
/// reference; observers read the grid but never mutate it. The payload
/// references stay valid only for the duration of the callback — observers
/// that need the grid later must clone it.
#[derive(Debug, Copy, Clone)]
pub enum EngineEvent<'a> {
    /// The engine's current grid was replaced (by a step, a reconfigure, or
    /// a wholesale load).
    GridUpdated {
        /// The new current grid.
        grid: &'a DenseGrid,
    },
    /// An edited configuration was saved into a catalog slot.
    ConfigSaved {
        /// The saved grid.
        grid: &'a DenseGrid,
        /// Index of the catalog slot written.
        slot: usize,
        /// Title under which the configuration was saved.
        title: &'a str,
    },
    /// The running simulation's grid was saved into a catalog slot.
    SimulationSaved {
        /// The saved grid.
        grid: &'a DenseGrid,
        /// Index of the catalog slot written.
        slot: usize,
        /// Title under which the simulation was saved.
        title: &'a str,
    },
}

impl EngineEvent<'_> {
    /// Stable name of this event kind, for string-keyed transports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GridUpdated { .. } => "gridUpdated",
            Self::ConfigSaved { .. } => "configSaved",
            Self::SimulationSaved { .. } => "simulationSaved",
        }
    }

    /// The grid this event concerns.
    pub fn grid(&self) -> &DenseGrid {
        match self {
            Self::GridUpdated { grid }
            | Self::ConfigSaved { grid, .. }
            | Self::SimulationSaved { grid, .. } => grid,
        }
    }
}
