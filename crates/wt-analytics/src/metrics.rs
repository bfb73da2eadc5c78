//! Per-wave and selection-wide metrics.
//!
//! # One pass, two drivers
//!
//! [`RouteAnalysis`] is the single forward pass over a wave's steps:
//! distance via the path model, trusted time gaps, revisits via the
//! detector.  A batch consumer drives it to completion
//! ([`wave_metrics`]); a replay consumer drives it one step at a time
//! through [`SelectionAnalysis`].  Both produce identical numbers because
//! they share this implementation.
//!
//! # Failure semantics
//!
//! Nothing here fails.  A missing or empty wave yields a zero-valued
//! [`WaveMetrics`]; every ratio yields 0 on a zero denominator.

use wt_core::{SlotId, is_trusted_gap, to_meters};
use wt_layout::{AisleGraph, PathModel, SlotGrid};
use wt_route::{RouteStep, TimelineEntry, WaveRouteSet};

use crate::revisit::{Granularity, RevisitCounts, RevisitDetector, RevisitEvent};

// ── AnalysisContext ───────────────────────────────────────────────────────────

/// Read-only inputs shared by every analysis pass: the slot grid, the
/// derived aisle graph, and the path model.
///
/// Cheap to construct per pass; all fields are borrows.
pub struct AnalysisContext<'a, P: PathModel> {
    pub grid:  &'a SlotGrid,
    pub graph: &'a AisleGraph,
    pub path:  &'a P,
}

impl<'a, P: PathModel> AnalysisContext<'a, P> {
    pub fn new(grid: &'a SlotGrid, graph: &'a AisleGraph, path: &'a P) -> Self {
        Self { grid, graph, path }
    }

    /// Travel distance between two slots in metres, final hop included.
    #[inline]
    pub fn segment_m(&self, from: SlotId, to: SlotId) -> f64 {
        to_meters(self.path.segment_units(
            self.grid.get(from),
            self.grid.get(to),
            self.graph,
            self.grid,
        ))
    }
}

// ── PickTiming / WaveMetrics ──────────────────────────────────────────────────

/// A single pick's trusted duration and where it happened.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickTiming {
    pub secs:     f64,
    pub location: String,
}

/// Aggregate metrics for one wave.
///
/// Cacheable by wave id while the underlying routes and aisle graph are
/// unchanged; invalidate on any upload, remap, or slot reload.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveMetrics {
    pub wave_id: String,
    /// Steps processed (picked units).
    pub units: u32,
    pub total_distance_m: f64,
    /// Sum of trusted inter-pick gaps only.
    pub total_time_secs: f64,
    pub revisits: RevisitCounts,
    /// Trusted time divided by units; 0 when no trusted time.
    pub avg_secs_per_unit: f64,
    /// Units per minute of trusted time; 0 when no trusted time.
    pub picks_per_min: f64,
    /// Every trusted inter-pick gap, in step order.
    pub pick_times_secs: Vec<f64>,
    pub slowest_pick: Option<PickTiming>,
    pub fastest_pick: Option<PickTiming>,
}

impl WaveMetrics {
    /// The well-defined all-zero record for a wave with no matched steps.
    pub fn zero(wave_id: impl Into<String>) -> Self {
        Self {
            wave_id: wave_id.into(),
            units: 0,
            total_distance_m: 0.0,
            total_time_secs: 0.0,
            revisits: RevisitCounts::default(),
            avg_secs_per_unit: 0.0,
            picks_per_min: 0.0,
            pick_times_secs: Vec::new(),
            slowest_pick: None,
            fastest_pick: None,
        }
    }
}

// ── RouteAnalysis ─────────────────────────────────────────────────────────────

/// The single forward pass over one wave's route.
///
/// Synchronous and bounded by the wave's step count — safe to call from any
/// context, including inside a chunked loop.
pub struct RouteAnalysis {
    detector: RevisitDetector,
    steps_seen: u32,
    total_distance_m: f64,
    total_time_secs: f64,
    pick_times_secs: Vec<f64>,
    slowest_pick: Option<PickTiming>,
    fastest_pick: Option<PickTiming>,
}

impl RouteAnalysis {
    pub fn new(wave_id: impl Into<String>) -> Self {
        Self {
            detector: RevisitDetector::new(wave_id),
            steps_seen: 0,
            total_distance_m: 0.0,
            total_time_secs: 0.0,
            pick_times_secs: Vec::new(),
            slowest_pick: None,
            fastest_pick: None,
        }
    }

    /// Process `route[idx]` as step `step_number` (1-based).
    ///
    /// Drive with `idx` ascending from 0.  `step_number` is the caller's
    /// frame: `idx + 1` for a wave-local pass, the global timeline position
    /// for a replay.
    pub fn advance<P: PathModel>(
        &mut self,
        ctx:         &AnalysisContext<'_, P>,
        route:       &[RouteStep],
        idx:         usize,
        step_number: u32,
    ) {
        let step = &route[idx];
        self.steps_seen += 1;

        if idx > 0 {
            let prev = &route[idx - 1];
            self.total_distance_m += ctx.segment_m(prev.slot, step.slot);
            self.observe_gap(prev, step);
        }

        self.detector.observe_step(step_number, step);
    }

    /// Count the inter-pick gap when both endpoints parsed and the gap is
    /// trusted; otherwise the gap is missing data, not an error.
    fn observe_gap(&mut self, prev: &RouteStep, step: &RouteStep) {
        let (Some(prev_ms), Some(cur_ms)) = (prev.time_millis, step.time_millis) else {
            return;
        };
        let gap_secs = (cur_ms - prev_ms) as f64 / 1_000.0;
        if !is_trusted_gap(gap_secs) {
            return;
        }

        self.total_time_secs += gap_secs;
        self.pick_times_secs.push(gap_secs);

        if self.slowest_pick.as_ref().is_none_or(|p| gap_secs > p.secs) {
            self.slowest_pick = Some(PickTiming { secs: gap_secs, location: step.location.clone() });
        }
        if self.fastest_pick.as_ref().is_none_or(|p| gap_secs < p.secs) {
            self.fastest_pick = Some(PickTiming { secs: gap_secs, location: step.location.clone() });
        }
    }

    // ── Running state accessors (used by SelectionAnalysis totals) ────────

    pub fn steps_seen(&self) -> u32 {
        self.steps_seen
    }

    pub fn total_distance_m(&self) -> f64 {
        self.total_distance_m
    }

    pub fn total_time_secs(&self) -> f64 {
        self.total_time_secs
    }

    pub fn pick_times_secs(&self) -> &[f64] {
        &self.pick_times_secs
    }

    pub fn detector(&self) -> &RevisitDetector {
        &self.detector
    }

    /// Finalize into a [`WaveMetrics`] record.
    pub fn into_metrics(self) -> WaveMetrics {
        let units = self.steps_seen;
        let time = self.total_time_secs;
        let (avg, speed) = if time > 0.0 {
            (time / f64::from(units), f64::from(units) / time * 60.0)
        } else {
            (0.0, 0.0)
        };

        WaveMetrics {
            wave_id: self.detector.wave_id().to_string(),
            units,
            total_distance_m: self.total_distance_m,
            total_time_secs: time,
            revisits: self.detector.counts(),
            avg_secs_per_unit: avg,
            picks_per_min: speed,
            pick_times_secs: self.pick_times_secs,
            slowest_pick: self.slowest_pick,
            fastest_pick: self.fastest_pick,
        }
    }
}

/// Compute one wave's metrics in a single batch pass.
pub fn wave_metrics<P: PathModel>(
    wave_id: &str,
    set:     &WaveRouteSet,
    ctx:     &AnalysisContext<'_, P>,
) -> WaveMetrics {
    let Some(route) = set.route(wave_id) else {
        return WaveMetrics::zero(wave_id);
    };

    let mut analysis = RouteAnalysis::new(wave_id);
    for idx in 0..route.len() {
        analysis.advance(ctx, route, idx, (idx + 1) as u32);
    }
    analysis.into_metrics()
}

// ── SelectionAnalysis ─────────────────────────────────────────────────────────

/// Combined running totals across a selection.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionTotals {
    /// Timeline entries processed so far.
    pub steps: u32,
    pub total_distance_m: f64,
    pub total_time_secs: f64,
    pub revisits: RevisitCounts,
    /// Mean trusted pick time; 0 when none.
    pub avg_pick_secs: f64,
    pub slowest_pick: Option<PickTiming>,
    pub fastest_pick: Option<PickTiming>,
}

/// Replay-style analysis of several waves along a global timeline.
///
/// Owns one [`RouteAnalysis`] per selected wave.  Selection changes are
/// handled by dropping the instance and building a fresh one against the
/// new selection — per-wave histories must never survive a selection
/// change.
pub struct SelectionAnalysis {
    selected: Vec<String>,
    analyses: Vec<RouteAnalysis>,
    cursor:   usize,
}

impl SelectionAnalysis {
    pub fn new(selected: &[String]) -> Self {
        Self {
            selected: selected.to_vec(),
            analyses: selected.iter().map(RouteAnalysis::new).collect(),
            cursor: 0,
        }
    }

    /// Process the next timeline entry.  Returns `false` when the timeline
    /// is exhausted.
    pub fn step<P: PathModel>(
        &mut self,
        ctx:      &AnalysisContext<'_, P>,
        set:      &WaveRouteSet,
        timeline: &[TimelineEntry],
    ) -> bool {
        let Some(entry) = timeline.get(self.cursor) else {
            return false;
        };
        self.cursor += 1;

        // Entries pointing outside the selection (timeline built against a
        // different selection) are skipped, not fatal.
        let Some(wave_id) = self.selected.get(entry.wave) else {
            return true;
        };
        if let Some(route) = set.route(wave_id)
            && entry.route_index < route.len()
        {
            // Step numbering is global: position on the merged timeline.
            self.analyses[entry.wave].advance(ctx, route, entry.route_index, self.cursor as u32);
        }
        true
    }

    /// Drain the remaining timeline.
    pub fn run_to_end<P: PathModel>(
        &mut self,
        ctx:      &AnalysisContext<'_, P>,
        set:      &WaveRouteSet,
        timeline: &[TimelineEntry],
    ) {
        while self.step(ctx, set, timeline) {}
    }

    /// Timeline entries processed so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Snapshot of the combined totals at the current position.
    pub fn totals(&self) -> SelectionTotals {
        let mut totals = SelectionTotals {
            steps: self.cursor as u32,
            ..SelectionTotals::default()
        };
        let mut pick_count = 0usize;
        let mut pick_sum = 0.0f64;

        for analysis in &self.analyses {
            totals.total_distance_m += analysis.total_distance_m;
            totals.total_time_secs += analysis.total_time_secs;
            totals.revisits = totals.revisits + analysis.detector.counts();
            pick_count += analysis.pick_times_secs.len();
            pick_sum += analysis.pick_times_secs.iter().sum::<f64>();

            if let Some(p) = &analysis.slowest_pick
                && totals.slowest_pick.as_ref().is_none_or(|b| p.secs > b.secs)
            {
                totals.slowest_pick = Some(p.clone());
            }
            if let Some(p) = &analysis.fastest_pick
                && totals.fastest_pick.as_ref().is_none_or(|b| p.secs < b.secs)
            {
                totals.fastest_pick = Some(p.clone());
            }
        }

        if pick_count > 0 {
            totals.avg_pick_secs = pick_sum / pick_count as f64;
        }
        totals
    }

    /// Combined events at one granularity, ordered by global step number.
    pub fn events(&self, granularity: Granularity) -> Vec<&RevisitEvent> {
        let mut events: Vec<&RevisitEvent> = self
            .analyses
            .iter()
            .flat_map(|a| a.detector.events(granularity).iter())
            .collect();
        // Global step numbers are unique across waves (one wave advances
        // per timeline position), so this reproduces emission order.
        events.sort_by_key(|e| e.revisit_step);
        events
    }

    /// Per-wave analysis state, aligned with the selection order.
    pub fn wave_analyses(&self) -> &[RouteAnalysis] {
        &self.analyses
    }
}
