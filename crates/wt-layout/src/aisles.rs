//! Aisle-graph derivation from slot coordinates.
//!
//! Aisles are not part of the uploaded data — they are inferred.  Racks sit
//! at regular coordinate intervals; a gap between adjacent distinct
//! coordinates wider than a rack footprint must be walkable space, and its
//! midpoint becomes an aisle center-line.  The thresholds differ per axis:
//! picking aisles (the y-axis gaps) are much wider than the rack-to-rack
//! gaps on the x-axis.
//!
//! Two synthetic boundary aisles per axis, placed outside the outermost
//! slots by a fixed margin, guarantee every slot has a reachable aisle on
//! each side even at the warehouse edge.

use crate::slots::SlotGrid;

/// Minimum x-gap (exclusive) between adjacent rack columns to count as a
/// vertical aisle.
pub const VERTICAL_GAP_UNITS: f32 = 60.0;

/// Minimum y-gap (inclusive) between adjacent rack rows to count as a
/// horizontal cross-aisle.  Larger than the vertical threshold: rows are
/// separated by full picking-aisle widths.
pub const HORIZONTAL_GAP_UNITS: f32 = 320.0;

/// How far outside the outermost slot the synthetic vertical boundary
/// aisles sit.
pub const VERTICAL_MARGIN_UNITS: f32 = 100.0;

/// How far outside the outermost slot the synthetic horizontal boundary
/// aisles sit.
pub const HORIZONTAL_MARGIN_UNITS: f32 = 200.0;

/// The derived aisle center-lines: sorted x-values of vertical aisles and
/// sorted y-values of horizontal cross-aisles, boundary lines included.
///
/// Derived once per slot set; rebuild whenever slots are reloaded.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AisleGraph {
    pub vertical:   Vec<f32>,
    pub horizontal: Vec<f32>,
}

impl AisleGraph {
    /// Derive the aisle graph from a slot grid.
    ///
    /// Degenerates gracefully: zero slots produce empty line sets; a single
    /// distinct coordinate on an axis produces only that axis's two boundary
    /// lines.  Never fails.
    pub fn detect(grid: &SlotGrid) -> Self {
        let vertical = detect_axis(
            grid.distinct_xs(),
            |gap| gap > VERTICAL_GAP_UNITS,
            VERTICAL_MARGIN_UNITS,
        );
        let horizontal = detect_axis(
            grid.distinct_ys(),
            |gap| gap >= HORIZONTAL_GAP_UNITS,
            HORIZONTAL_MARGIN_UNITS,
        );
        Self { vertical, horizontal }
    }

    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }
}

/// Walk adjacent coordinate pairs emitting gap midpoints, then wrap the
/// result in the two boundary lines.
///
/// `coords` must be sorted ascending and deduplicated (guaranteed by
/// `SlotGrid`), so the output is sorted ascending by construction.
fn detect_axis(coords: &[f32], is_aisle_gap: impl Fn(f32) -> bool, margin: f32) -> Vec<f32> {
    let mut lines = Vec::new();

    let (Some(&first), Some(&last)) = (coords.first(), coords.last()) else {
        return lines;
    };

    lines.push(first - margin);
    for pair in coords.windows(2) {
        if is_aisle_gap(pair[1] - pair[0]) {
            lines.push((pair[0] + pair[1]) / 2.0);
        }
    }
    lines.push(last + margin);

    lines
}
