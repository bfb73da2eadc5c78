//! Nearest-neighbor "ideal distance" baseline.
//!
//! Approximates a lower bound on travel for the union of distinct slots a
//! selection visits, ignoring the actual visit order: start at the first
//! distinct slot in encounter order, repeatedly hop to the nearest
//! not-yet-visited slot (path cost via the path model, final hop included),
//! stop when all are visited.
//!
//! This is the classic nearest-neighbor TSP heuristic, **not** a true
//! optimum.  It exists purely as a normalization baseline for path
//! efficiency; on pathological layouts its tour can be longer than the
//! actual route, which legitimately pushes reported efficiency above 100 %.

use rustc_hash::FxHashSet;

use wt_core::{SlotId, to_meters};
use wt_layout::PathModel;
use wt_route::WaveRouteSet;

use crate::metrics::AnalysisContext;

/// Greedy nearest-neighbor tour length over the selection's distinct slots,
/// in metres.
///
/// Distinctness is by slot-level location; the slot of the first occurrence
/// represents each location.  Fewer than two distinct slots → 0.
pub fn ideal_distance_m<P: PathModel>(
    selected: &[String],
    set:      &WaveRouteSet,
    ctx:      &AnalysisContext<'_, P>,
) -> f64 {
    let stops = distinct_stops(selected, set);
    if stops.len() < 2 {
        return 0.0;
    }

    let mut current = stops[0];
    let mut remaining: Vec<SlotId> = stops[1..].to_vec();
    let mut total_m = 0.0f64;

    while !remaining.is_empty() {
        let mut nearest_idx = 0;
        let mut nearest_units = f32::INFINITY;

        for (i, &candidate) in remaining.iter().enumerate() {
            let d = ctx.path.segment_units(
                ctx.grid.get(current),
                ctx.grid.get(candidate),
                ctx.graph,
                ctx.grid,
            );
            if d < nearest_units {
                nearest_units = d;
                nearest_idx = i;
            }
        }

        total_m += to_meters(nearest_units);
        // Keep encounter order so distance ties always resolve to the
        // earliest-seen slot.
        current = remaining.remove(nearest_idx);
    }

    total_m
}

/// Distinct visited slots in first-encounter order across the selection.
fn distinct_stops(selected: &[String], set: &WaveRouteSet) -> Vec<SlotId> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut stops = Vec::new();

    for wave_id in selected {
        let Some(route) = set.route(wave_id) else {
            continue;
        };
        for step in route {
            if seen.insert(&step.location) {
                stops.push(step.slot);
            }
        }
    }
    stops
}
