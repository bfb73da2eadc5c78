//! `wt-layout` — warehouse geometry for the wavetrace workspace.
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`slots`]  | `Slot` record, `SlotGrid` collection + lookup indexes     |
//! | [`aisles`] | `AisleGraph` derivation from slot coordinates             |
//! | [`path`]   | `PathModel` trait, `AislePathFinder` default              |
//! | [`loader`] | CSV slot loading (feature `csv`)                          |
//!
//! # Geometry model
//!
//! The warehouse is rectilinear: racks align to two perpendicular axes and
//! aisles are the gaps between rack columns/rows.  The aisle graph is
//! therefore one-dimensional per axis — two sorted arrays of center-line
//! coordinates — and all travel is Manhattan.  This is deliberately not a
//! general shortest-path solver; blocking is approximated by axis-aligned
//! occupancy checks, not 2-D collision avoidance.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `csv`   | Enable [`loader`] (CSV slot ingestion).                 |
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod aisles;
pub mod error;
pub mod path;
pub mod slots;

#[cfg(feature = "csv")]
pub mod loader;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use aisles::AisleGraph;
pub use error::{LayoutError, LayoutResult};
pub use path::{AislePathFinder, PathModel, path_length_units};
pub use slots::{Slot, SlotGrid, SlotGridBuilder};

#[cfg(feature = "csv")]
pub use loader::{load_slots_csv, load_slots_reader};
