//! Cross-wave global timeline.
//!
//! When several waves are analyzed together, their steps interleave into one
//! sequence ordered by effective timestamp.  The timeline is the ordering
//! spine a replay consumer walks: each entry names a wave (by index into the
//! caller's selection) and a step within that wave's route.

use crate::index::WaveRouteSet;

/// One position on the merged timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelineEntry {
    /// Index into the selection slice passed to [`build_global_timeline`].
    pub wave: usize,
    /// Index into that wave's route.
    pub route_index: usize,
    /// The step's effective timestamp (epoch millis, or its sequence-index
    /// fallback).
    pub timestamp: i64,
}

/// Merge the selected waves' steps into one sequence ordered by
/// (timestamp, wave id, route index).
///
/// Selection entries naming unknown waves contribute nothing.  The tie
/// order makes replay deterministic even when two waves scan in the same
/// millisecond.
pub fn build_global_timeline(selected: &[String], set: &WaveRouteSet) -> Vec<TimelineEntry> {
    let mut timeline = Vec::new();

    for (wave, wave_id) in selected.iter().enumerate() {
        let Some(route) = set.route(wave_id) else {
            continue;
        };
        for (route_index, step) in route.iter().enumerate() {
            timeline.push(TimelineEntry {
                wave,
                route_index,
                timestamp: step.timestamp,
            });
        }
    }

    timeline.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| selected[a.wave].cmp(&selected[b.wave]))
            .then_with(|| a.route_index.cmp(&b.route_index))
    });

    timeline
}
