//! `wt-core` — foundational types for the `wavetrace` warehouse analytics
//! workspace.
//!
//! This crate is a dependency of every other `wt-*` crate.  It intentionally
//! has no `wt-*` dependencies and minimal external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `SlotId` typed index                                    |
//! | [`point`]  | `MapPoint`, Manhattan distance, unit conversion         |
//! | [`keys`]   | Bay-level truncation of slot location identifiers       |
//! | [`time`]   | Trusted-gap ceiling, duration formatting                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod ids;
pub mod keys;
pub mod point;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::SlotId;
pub use keys::bay_key;
pub use point::{MapPoint, UNITS_PER_METER, to_meters};
pub use time::{TRUSTED_GAP_CEILING_SECS, format_duration, is_trusted_gap};
