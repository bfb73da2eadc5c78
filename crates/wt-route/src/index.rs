//! Wave-route index construction.
//!
//! # Matching
//!
//! Each row resolves to a known slot through a fallback chain, every step
//! case-insensitive: exact slot-level location, bay-truncated location, the
//! aisle+bay label against both forms.  Rows that resolve to nothing are
//! silently dropped — heterogeneous and partial uploads are the norm, so an
//! unmatched row is data to skip, not an error.  The number of rows that
//! *did* match is surfaced so callers can show coverage.
//!
//! # Ordering
//!
//! Within a wave, steps sort by parsed timestamp ascending.  When either
//! side of a comparison is unparseable, the raw time strings compare
//! lexicographically instead.  The sort is stable, so original row order
//! breaks ties.

use std::collections::BTreeMap;

use wt_core::{SlotId, bay_key};
use wt_layout::SlotGrid;

use crate::row::{ColumnMapping, RawRow, cell, cell_required};
use crate::time::parse_time_millis;

/// Wave id assigned to every row when no wave column is mapped or the cell
/// is blank.
pub const DEFAULT_WAVE_ID: &str = "Wave1";

// ── RouteStep ─────────────────────────────────────────────────────────────────

/// One matched visit within a wave.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStep {
    /// The raw time cell, kept verbatim for string-comparison fallbacks and
    /// display.
    pub time: String,
    /// Parsed epoch milliseconds; `None` when `time` is unparseable.  Time
    /// aggregates trust a gap only when both of its endpoints parsed.
    pub time_millis: Option<i64>,
    /// Effective ordering timestamp: `time_millis`, or the original row's
    /// sequence index when unparseable.
    pub timestamp: i64,
    /// Slot-level location, as uploaded.
    pub location: String,
    /// Bay-level truncation of `location`.
    pub bay_location: String,
    /// Aisle label: the row's own value, else the matched slot's, else empty.
    pub aisle: String,
    /// SKU picked at this step; may be empty.
    pub sku: String,
    /// The matched slot.
    pub slot: SlotId,
}

// ── WaveRouteSet ──────────────────────────────────────────────────────────────

/// All wave routes built from one (rows, mapping, slot grid) triple.
///
/// Immutable once built; a new upload or re-mapping produces a whole new
/// set.  Waves with zero matched rows do not appear — a present route is
/// never empty.
pub struct WaveRouteSet {
    routes: BTreeMap<String, Vec<RouteStep>>,
    matched: usize,
}

impl WaveRouteSet {
    /// The route for `wave_id`, or `None` for an unknown wave.
    pub fn route(&self, wave_id: &str) -> Option<&[RouteStep]> {
        self.routes.get(wave_id).map(Vec::as_slice)
    }

    /// Distinct wave ids in ascending order.
    pub fn wave_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.routes.keys().map(String::as_str)
    }

    /// Iterator over `(wave id, route)` pairs in wave-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RouteStep])> + '_ {
        self.routes.iter().map(|(id, r)| (id.as_str(), r.as_slice()))
    }

    /// How many raw rows resolved to a known slot.
    pub fn matched(&self) -> usize {
        self.matched
    }

    pub fn wave_count(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

/// Build per-wave ordered routes from raw rows.
pub fn build_wave_routes(
    rows:    &[RawRow],
    mapping: &ColumnMapping,
    grid:    &SlotGrid,
) -> WaveRouteSet {
    let mut routes: BTreeMap<String, Vec<RouteStep>> = BTreeMap::new();
    let mut matched = 0usize;

    for (idx, row) in rows.iter().enumerate() {
        let location = cell_required(row, &mapping.location).trim();
        if location.is_empty() {
            continue;
        }

        let Some(slot) = resolve_slot(location, grid) else {
            continue;
        };
        matched += 1;

        let wave = match cell(row, &mapping.wave).trim() {
            "" => DEFAULT_WAVE_ID.to_string(),
            w => w.to_string(),
        };

        // With no time column the sequence index stands in as the raw
        // value, which round-trips through the epoch-millis parser.
        let time = match &mapping.time {
            Some(col) => cell_required(row, col).to_string(),
            None => idx.to_string(),
        };
        let time_millis = parse_time_millis(&time);
        let timestamp = time_millis.unwrap_or(idx as i64);

        let aisle = match cell(row, &mapping.aisle).trim() {
            "" => grid.get(slot).aisle.clone(),
            a => a.to_string(),
        };

        routes.entry(wave).or_default().push(RouteStep {
            time,
            time_millis,
            timestamp,
            location: location.to_string(),
            bay_location: bay_key(location).to_string(),
            aisle,
            sku: cell_required(row, &mapping.sku).trim().to_string(),
            slot,
        });
    }

    for steps in routes.values_mut() {
        // Stable: ties keep original row order.
        steps.sort_by(|a, b| match (a.time_millis, b.time_millis) {
            (Some(ta), Some(tb)) => ta.cmp(&tb),
            _ => a.time.cmp(&b.time),
        });
    }

    WaveRouteSet { routes, matched }
}

/// The slot-matching fallback chain.
fn resolve_slot(location: &str, grid: &SlotGrid) -> Option<SlotId> {
    let bay = bay_key(location);
    grid.lookup_location(location)
        .or_else(|| grid.lookup_location(bay))
        .or_else(|| grid.lookup_label(location))
        .or_else(|| grid.lookup_label(bay))
}
