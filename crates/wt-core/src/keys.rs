//! Bay-level truncation of slot location identifiers.
//!
//! Slot locations are hyphen-delimited, e.g. `ID1111-2550-33`: the first
//! segment identifies zone, the second the aisle+bay, the third the slot
//! number within the bay.  Truncating to the first two segments yields the
//! bay key — two slots sharing it sit on the same physical shelf.

/// Truncate a slot-level location to its bay key.
///
/// Returns the prefix up to (not including) the second hyphen.  Locations
/// with fewer than two segments are returned unchanged, so the function is
/// idempotent: `bay_key(bay_key(s)) == bay_key(s)`.
pub fn bay_key(location: &str) -> &str {
    match location.find('-') {
        None => location,
        Some(first) => match location[first + 1..].find('-') {
            None => location,
            Some(second) => &location[..first + 1 + second],
        },
    }
}
