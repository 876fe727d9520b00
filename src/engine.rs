//! Process-wide simulation state and the operations drivers invoke on it.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::event::EngineEvent;
use crate::grid::{DenseGrid, Grid, GridResult};
use crate::position::GridSize;
use crate::stats::GridStats;

/// Default number of rows for a freshly constructed engine.
pub const DEFAULT_ROWS: usize = 10;
/// Default number of columns for a freshly constructed engine.
pub const DEFAULT_COLS: usize = 10;
/// Default auto-step refresh rate, in steps per second.
pub const DEFAULT_REFRESH_RATE: f64 = 2.5;

/// Observer that is told whenever the engine's grid changes.
pub trait EngineDelegate {
    /// Called after every grid replacement (step, reconfigure, or load).
    fn engine_did_update(&mut self, engine: &Engine);
}

/// Registered event listener. Receives every [`EngineEvent`] the engine
/// emits; the grid reference in the event must not outlive the call.
pub type Listener = Box<dyn FnMut(EngineEvent<'_>) + Send + Sync>;

/// Shared handle to an engine for timer-driven drivers.
///
/// The engine assumes a single writer at a time: the driver that calls
/// [`Engine::step`], [`Engine::configure`], or [`Engine::load`]. Wrapping it
/// in an `RwLock` makes `step()` atomic with respect to concurrent readers —
/// a reader sees either the pre-step or the fully post-step grid and stats,
/// never a partial update.
pub type SharedEngine = Arc<RwLock<Engine>>;

/// Simulation engine: one current grid plus bookkeeping.
///
/// Owns the current [`DenseGrid`], the configured refresh rate (scheduling
/// itself is the driver's job), cumulative statistics summed across steps,
/// and optional (title, slot) metadata identifying which saved configuration
/// is loaded. Constructed explicitly and passed to whoever drives it; there
/// is no global instance.
pub struct Engine {
    grid: DenseGrid,
    refresh_rate: f64,
    cumulative_stats: GridStats,
    title: Option<String>,
    slot: Option<usize>,
    delegate: Option<Box<dyn EngineDelegate + Send + Sync>>,
    listeners: Vec<Listener>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("size", &self.grid.size())
            .field("refresh_rate", &self.refresh_rate)
            .field("cumulative_stats", &self.cumulative_stats)
            .field("title", &self.title)
            .field("slot", &self.slot)
            .field("num_listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS).expect("default engine dimensions are nonzero")
    }
}

impl Engine {
    /// Constructs an engine with a fresh empty grid of the given size.
    pub fn new(rows: usize, cols: usize) -> GridResult<Self> {
        let grid = DenseGrid::new(rows, cols)?;
        let cumulative_stats = grid.stats();
        Ok(Self {
            grid,
            refresh_rate: DEFAULT_REFRESH_RATE,
            cumulative_stats,
            title: None,
            slot: None,
            delegate: None,
            listeners: vec![],
        })
    }

    /// Wraps the engine in the shared handle used by timer-driven drivers.
    pub fn into_shared(self) -> SharedEngine {
        Arc::new(RwLock::new(self))
    }

    /// The current grid.
    #[inline]
    pub fn grid(&self) -> &DenseGrid {
        &self.grid
    }

    /// Current grid dimensions.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.grid.size()
    }

    /// Statistics summed over every step since the last reset. These do not
    /// satisfy the per-grid invariant; they grow until reset.
    #[inline]
    pub fn cumulative_stats(&self) -> GridStats {
        self.cumulative_stats
    }

    /// Title of the loaded saved configuration, if any.
    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Catalog slot of the loaded saved configuration, if any.
    #[inline]
    pub fn slot(&self) -> Option<usize> {
        self.slot
    }

    /// Configured auto-step rate, in steps per second.
    #[inline]
    pub fn refresh_rate(&self) -> f64 {
        self.refresh_rate
    }

    /// Sets the auto-step rate. The engine does not schedule anything
    /// itself; drivers read this value back when they set up their timer.
    #[inline]
    pub fn set_refresh_rate(&mut self, rate: f64) {
        self.refresh_rate = rate;
    }

    /// Installs the delegate notified on every grid change.
    pub fn set_delegate(&mut self, delegate: impl EngineDelegate + Send + Sync + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    /// Registers an event listener.
    pub fn add_listener(&mut self, listener: impl FnMut(EngineEvent<'_>) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replaces the grid with a fresh empty one of the given size, clearing
    /// the title/slot metadata and the cumulative statistics.
    ///
    /// Fails fast with `InvalidDimensions` if either dimension is zero; the
    /// engine is left untouched in that case.
    pub fn configure(&mut self, rows: usize, cols: usize) -> GridResult<()> {
        let grid = DenseGrid::new(rows, cols)?;
        log::debug!("engine reconfigured to {}x{}", rows, cols);
        self.grid = grid;
        self.clear_metadata();
        self.notify_grid_updated();
        Ok(())
    }

    /// Replaces the current grid wholesale, e.g. when a driver restores a
    /// saved configuration or finishes a manual edit. Dimensions are taken
    /// from the loaded grid; cumulative stats restart from its snapshot.
    pub fn load(&mut self, grid: DenseGrid, title: Option<String>, slot: Option<usize>) {
        self.grid = grid;
        self.clear_metadata();
        self.title = title;
        self.slot = slot;
        self.notify_grid_updated();
    }

    /// Advances the simulation by one generation and returns the new grid.
    ///
    /// The new grid's statistics are merged into the cumulative counters by
    /// addition, never replacement. This is the sole generation-advancing
    /// primitive; timer-driven auto-play calls it once per tick, and calling
    /// it back-to-back is always safe.
    pub fn step(&mut self) -> &DenseGrid {
        let new_grid = self.grid.next();
        self.cumulative_stats += new_grid.stats();
        self.grid = new_grid;
        log::trace!("stepped; cumulative stats: {:?}", self.cumulative_stats);
        self.notify_grid_updated();
        &self.grid
    }

    /// Overwrites the cumulative counters with the current grid's own
    /// stats: "start counting from now."
    pub fn reset_stats(&mut self) {
        self.cumulative_stats = self.grid.stats();
    }

    /// Saves an edited configuration into a catalog slot: loads `grid` as
    /// the current grid, records the (title, slot) metadata, and emits
    /// `ConfigSaved` followed by the usual grid-changed notifications.
    pub fn save_configuration(&mut self, grid: DenseGrid, slot: usize, title: impl Into<String>) {
        let title = title.into();
        self.grid = grid;
        self.reset_stats();
        self.title = Some(title.clone());
        self.slot = Some(slot);
        let event = EngineEvent::ConfigSaved {
            grid: &self.grid,
            slot,
            title: &title,
        };
        for listener in &mut self.listeners {
            listener(event);
        }
        self.notify_grid_updated();
    }

    /// Announces that the running simulation's grid was saved into a catalog
    /// slot. The engine's own state is unchanged.
    pub fn save_simulation(&mut self, slot: usize, title: &str) {
        let event = EngineEvent::SimulationSaved {
            grid: &self.grid,
            slot,
            title,
        };
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    fn clear_metadata(&mut self) {
        self.title = None;
        self.slot = None;
        self.reset_stats();
    }

    fn notify_grid_updated(&mut self) {
        if let Some(mut delegate) = self.delegate.take() {
            delegate.engine_did_update(self);
            self.delegate = Some(delegate);
        }
        let event = EngineEvent::GridUpdated { grid: &self.grid };
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}
