//! `wt-route` — wave-route construction for the wavetrace workspace.
//!
//! Turns a raw tabular row set plus a column-role mapping into per-wave
//! ordered visit sequences matched against a known slot grid.  Uploads are
//! operational data: heterogeneous, partially matched, with unreliable
//! timestamps.  Everything here is best-effort by design — unmatched rows
//! are dropped and counted, unparseable times fall back to documented
//! substitutes, and nothing is fatal.
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`row`]      | `RawRow`, `ColumnMapping`                             |
//! | [`time`]     | Best-effort wall-clock parsing to epoch millis        |
//! | [`index`]    | `RouteStep`, `WaveRouteSet`, `build_wave_routes`      |
//! | [`timeline`] | Cross-wave global timeline ordering                   |
//! | [`loader`]   | CSV → `Vec<RawRow>`                                   |

pub mod error;
pub mod index;
pub mod loader;
pub mod row;
pub mod time;
pub mod timeline;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RouteError, RouteResult};
pub use index::{DEFAULT_WAVE_ID, RouteStep, WaveRouteSet, build_wave_routes};
pub use loader::{load_rows_csv, load_rows_reader};
pub use row::{ColumnMapping, RawRow};
pub use time::parse_time_millis;
pub use timeline::{TimelineEntry, build_global_timeline};
