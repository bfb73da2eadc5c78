//! Cooperative visit-frequency accumulation for heatmap consumers.
//!
//! A large selection can hold hundreds of thousands of (wave × step) pairs —
//! enough to visibly stall a host that shares one thread with a UI.  The
//! accumulator therefore advances in bounded chunks measured in *steps*
//! (deterministic work units, not wall time), yielding control between
//! chunks.
//!
//! # Staleness discipline
//!
//! The accumulator owns its frequency map and visit-count vector outright
//! and cannot be restarted mid-stream.  On a selection change the caller
//! drops the old instance and constructs a fresh one: the orphaned state is
//! unreachable, so no generation counter is needed for correctness.
//! Per-slot counts live here — in an annotation vector indexed by `SlotId` —
//! never on the slots themselves.

use rustc_hash::FxHashMap;

use wt_core::SlotId;
use wt_layout::SlotGrid;
use wt_route::WaveRouteSet;

/// Steps processed per [`HeatmapAccumulator::process_chunk`] call.
pub const HEATMAP_CHUNK_STEPS: usize = 800;

/// Chunked accumulator of per-location visit frequencies across a selection.
pub struct HeatmapAccumulator {
    selected:  Vec<String>,
    wave_idx:  usize,
    step_idx:  usize,
    frequency: FxHashMap<String, u32>,
    /// Cumulative visits per slot, indexed by `SlotId`.
    visit_counts: Vec<u32>,
}

impl HeatmapAccumulator {
    /// Start a fresh accumulation over `selected`, with zeroed counts sized
    /// to `grid`.
    pub fn new(selected: &[String], grid: &SlotGrid) -> Self {
        Self {
            selected:  selected.to_vec(),
            wave_idx:  0,
            step_idx:  0,
            frequency: FxHashMap::default(),
            visit_counts: vec![0; grid.len()],
        }
    }

    /// Process up to [`HEATMAP_CHUNK_STEPS`] steps.  Returns `true` once the
    /// whole selection has been consumed.
    pub fn process_chunk(&mut self, set: &WaveRouteSet) -> bool {
        self.process_steps(set, HEATMAP_CHUNK_STEPS)
    }

    /// Process up to `budget` steps; the bounded work unit behind
    /// [`process_chunk`](Self::process_chunk).
    pub fn process_steps(&mut self, set: &WaveRouteSet, budget: usize) -> bool {
        let mut processed = 0;

        while self.wave_idx < self.selected.len() && processed < budget {
            let route = match set.route(&self.selected[self.wave_idx]) {
                Some(r) if !r.is_empty() => r,
                _ => {
                    self.wave_idx += 1;
                    self.step_idx = 0;
                    continue;
                }
            };

            let step = &route[self.step_idx];
            let count = self.frequency.entry(step.location.clone()).or_insert(0);
            *count += 1;
            self.visit_counts[step.slot.index()] = *count;

            processed += 1;
            self.step_idx += 1;
            if self.step_idx >= route.len() {
                self.wave_idx += 1;
                self.step_idx = 0;
            }
        }

        self.is_finished()
    }

    /// Drain the remaining selection synchronously.
    pub fn run_to_end(&mut self, set: &WaveRouteSet) {
        while !self.process_chunk(set) {}
    }

    pub fn is_finished(&self) -> bool {
        self.wave_idx >= self.selected.len()
    }

    // ── Results ───────────────────────────────────────────────────────────

    /// Visit count per slot-level location.
    pub fn frequency(&self) -> &FxHashMap<String, u32> {
        &self.frequency
    }

    /// Cumulative visit count for one slot.
    #[inline]
    pub fn visit_count(&self, slot: SlotId) -> u32 {
        self.visit_counts[slot.index()]
    }

    /// Per-slot counts indexed by `SlotId`.
    pub fn visit_counts(&self) -> &[u32] {
        &self.visit_counts
    }

    /// `true` if the slot was visited at all by the selection.
    #[inline]
    pub fn on_route(&self, slot: SlotId) -> bool {
        self.visit_counts[slot.index()] > 0
    }

    /// The hottest location's count; 0 before anything accumulates.
    pub fn max_visits(&self) -> u32 {
        self.frequency.values().copied().max().unwrap_or(0)
    }
}
