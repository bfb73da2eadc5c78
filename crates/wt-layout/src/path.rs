//! Path-model trait and the default rectilinear implementation.
//!
//! # Pluggability
//!
//! Analytics call path finding via the [`PathModel`] trait, so applications
//! can swap in custom implementations (graph-based routing, recorded AGV
//! traces) without touching the metrics engine.  The default
//! [`AislePathFinder`] models a picker on foot in a rectilinear warehouse.
//!
//! # Path shape
//!
//! A path between two slots is at most four waypoints:
//!
//! ```text
//! exit to your aisle → travel to the cross-aisle → traverse to the
//! destination aisle → travel down it
//! ```
//!
//! When both slots resolve to the same vertical aisle the middle two
//! waypoints collapse and the path is a single-aisle in/out traversal.  The
//! final straight hop from the last waypoint to the destination slot is the
//! **caller's** responsibility — callers that only need a length use
//! [`PathModel::segment_units`], which includes it.
//!
//! # Distance convention
//!
//! Every segment is the Manhattan (L1) distance between consecutive points,
//! in native coordinate units.  Conversion to metres happens at reporting
//! time via [`wt_core::to_meters`].

use wt_core::MapPoint;

use crate::aisles::AisleGraph;
use crate::slots::{Slot, SlotGrid};

// ── PathModel trait ───────────────────────────────────────────────────────────

/// Pluggable travel-path reconstruction.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so the many-wave metrics sweep can
/// share them across Rayon worker threads.
pub trait PathModel: Send + Sync {
    /// Ordered waypoints from `from` to `to`, excluding both endpoints.
    ///
    /// Must return an empty sequence when the endpoints coincide within one
    /// native unit on both axes.  Never fails: degenerate geometry produces
    /// a degenerate-but-valid path.
    fn aisle_path(
        &self,
        from:  &Slot,
        to:    &Slot,
        graph: &AisleGraph,
        grid:  &SlotGrid,
    ) -> Vec<MapPoint>;

    /// Total travel length `from → waypoints → to` in native units,
    /// including the final hop onto the destination slot.
    fn segment_units(
        &self,
        from:  &Slot,
        to:    &Slot,
        graph: &AisleGraph,
        grid:  &SlotGrid,
    ) -> f32 {
        path_length_units(from.pos, &self.aisle_path(from, to, graph, grid), to.pos)
    }
}

/// Manhattan length of `from → waypoints → to`, final hop included.
pub fn path_length_units(from: MapPoint, waypoints: &[MapPoint], to: MapPoint) -> f32 {
    let mut last = from;
    let mut total = 0.0_f32;
    for &wp in waypoints {
        total += last.manhattan(wp);
        last = wp;
    }
    total + last.manhattan(to)
}

// ── AislePathFinder ───────────────────────────────────────────────────────────

/// Default rectilinear path model.
///
/// Selects each endpoint's nearest *unobstructed* vertical aisle (falling
/// back to the globally nearest when every candidate is obstructed — a
/// result is always produced), then connects different aisles through the
/// best horizontal cross-aisle.
pub struct AislePathFinder;

impl AislePathFinder {
    /// Index into `graph.vertical` of the aisle serving `slot`.
    ///
    /// Prefers the line minimizing horizontal distance to the slot subject
    /// to no other slot column lying strictly between line and slot — an
    /// approximate line-of-sight check that ignores y entirely.  Returns
    /// `None` only when the graph has no vertical lines.
    pub fn accessible_vertical(
        &self,
        slot:  &Slot,
        graph: &AisleGraph,
        grid:  &SlotGrid,
    ) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut best_dist = f32::INFINITY;

        for (i, &line) in graph.vertical.iter().enumerate() {
            let lo = line.min(slot.pos.x);
            let hi = line.max(slot.pos.x);
            if grid.any_x_strictly_between(lo, hi) {
                continue;
            }
            let dist = (line - slot.pos.x).abs();
            if dist < best_dist {
                best = Some(i);
                best_dist = dist;
            }
        }

        // Every candidate obstructed: fall back to the nearest line so a
        // path always exists.
        best.or_else(|| nearest_index(slot.pos.x, &graph.vertical))
    }

    /// The y-value of the horizontal cross-aisle connecting `start_y` and
    /// `end_y`: the first line inside the inclusive interval, else the line
    /// nearest the interval midpoint, else the midpoint itself when the
    /// graph has no horizontal lines.
    pub fn best_horizontal(&self, start_y: f32, end_y: f32, graph: &AisleGraph) -> f32 {
        let mid = (start_y + end_y) / 2.0;
        if graph.horizontal.is_empty() {
            return mid;
        }

        let lo = start_y.min(end_y);
        let hi = start_y.max(end_y);
        for &line in &graph.horizontal {
            if line >= lo && line <= hi {
                return line;
            }
        }

        match nearest_index(mid, &graph.horizontal) {
            Some(i) => graph.horizontal[i],
            None => mid,
        }
    }
}

impl PathModel for AislePathFinder {
    fn aisle_path(
        &self,
        from:  &Slot,
        to:    &Slot,
        graph: &AisleGraph,
        grid:  &SlotGrid,
    ) -> Vec<MapPoint> {
        if from.pos.coincident(to.pos) {
            return Vec::new();
        }

        let start = self.accessible_vertical(from, graph, grid);
        let end = self.accessible_vertical(to, graph, grid);

        // With no vertical lines at all the slot's own column stands in for
        // its aisle (degenerate straight path).
        let start_x = start.map_or(from.pos.x, |i| graph.vertical[i]);
        let end_x = end.map_or(to.pos.x, |i| graph.vertical[i]);

        let same_aisle = match (start, end) {
            (Some(a), Some(b)) => a == b,
            _ => start_x == end_x,
        };

        if same_aisle {
            // Single-aisle in/out traversal.
            vec![
                MapPoint::new(start_x, from.pos.y),
                MapPoint::new(start_x, to.pos.y),
            ]
        } else {
            let crossing_y = self.best_horizontal(from.pos.y, to.pos.y, graph);
            vec![
                MapPoint::new(start_x, from.pos.y),
                MapPoint::new(start_x, crossing_y),
                MapPoint::new(end_x, crossing_y),
                MapPoint::new(end_x, to.pos.y),
            ]
        }
    }
}

/// Index of the line nearest `pos`; first wins on ties.
fn nearest_index(pos: f32, lines: &[f32]) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut best_dist = f32::INFINITY;
    for (i, &line) in lines.iter().enumerate() {
        let dist = (line - pos).abs();
        if dist < best_dist {
            best = Some(i);
            best_dist = dist;
        }
    }
    best
}
