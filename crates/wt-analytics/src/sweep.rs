//! Chunked per-wave metrics sweep and the abnormal-wave summary.
//!
//! Computing metrics for every wave in a large index is the other analysis
//! that can outgrow one scheduling slice.  The sweep processes one wave per
//! work unit — each unit is bounded by that wave's step count — so a host
//! can interleave it with other work.  Like the heatmap accumulator it is a
//! finite cursor: drop it and build a fresh one on any input change.

use wt_layout::PathModel;
use wt_route::WaveRouteSet;

use crate::metrics::{AnalysisContext, WaveMetrics, wave_metrics};
use crate::revisit::RevisitCounts;

// ── MetricsSweep ──────────────────────────────────────────────────────────────

/// Cooperative sweep producing one [`WaveMetrics`] per selected wave, in
/// selection order.
pub struct MetricsSweep {
    selected: Vec<String>,
    next:     usize,
    results:  Vec<WaveMetrics>,
}

impl MetricsSweep {
    pub fn new(selected: &[String]) -> Self {
        Self {
            selected: selected.to_vec(),
            next:     0,
            results:  Vec::with_capacity(selected.len()),
        }
    }

    /// Compute the next wave's metrics.  Returns `true` once every wave is
    /// done.
    pub fn advance<P: PathModel>(
        &mut self,
        ctx: &AnalysisContext<'_, P>,
        set: &WaveRouteSet,
    ) -> bool {
        if let Some(wave_id) = self.selected.get(self.next) {
            self.results.push(wave_metrics(wave_id, set, ctx));
            self.next += 1;
        }
        self.is_finished()
    }

    /// Compute all remaining waves.
    ///
    /// With the `parallel` feature the remaining waves run on Rayon's thread
    /// pool; results land in selection order either way.
    pub fn run_to_end<P: PathModel>(
        &mut self,
        ctx: &AnalysisContext<'_, P>,
        set: &WaveRouteSet,
    ) {
        #[cfg(not(feature = "parallel"))]
        {
            while !self.advance(ctx, set) {}
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let remaining: Vec<WaveMetrics> = self.selected[self.next..]
                .par_iter()
                .map(|wave_id| wave_metrics(wave_id, set, ctx))
                .collect();
            self.results.extend(remaining);
            self.next = self.selected.len();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.selected.len()
    }

    /// Metrics computed so far, in selection order.
    pub fn results(&self) -> &[WaveMetrics] {
        &self.results
    }

    pub fn into_results(self) -> Vec<WaveMetrics> {
        self.results
    }
}

// ── Abnormal waves ────────────────────────────────────────────────────────────

/// A wave flagged for backtracking: it has at least one revisit at some
/// granularity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbnormalWave {
    pub wave_id:  String,
    pub revisits: RevisitCounts,
}

/// The waves with any revisits, in the order their metrics appear.
pub fn abnormal_waves(metrics: &[WaveMetrics]) -> Vec<AbnormalWave> {
    metrics
        .iter()
        .filter(|m| m.revisits.total() > 0)
        .map(|m| AbnormalWave {
            wave_id:  m.wave_id.clone(),
            revisits: m.revisits,
        })
        .collect()
}
