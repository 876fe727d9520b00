//! Import/export of saved grid configurations.
//!
//! The save format is a JSON record `{ "title": ..., "contents": [[row,
//! col], ...] }` listing every living cell; remote catalogs are JSON arrays
//! of the same records. The format (including its quirky resizing heuristic
//! on load) is kept bit-compatible with existing saved data.

mod griddata;

pub use griddata::{parse_catalog, GridData, SavedGridError, SavedGridResult};
