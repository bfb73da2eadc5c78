//! Hour-of-day pick distribution.

use chrono::{DateTime, Timelike};

use wt_route::WaveRouteSet;

/// Count the selection's steps per UTC hour of day.
///
/// Buckets by each step's effective timestamp.  A zero timestamp is treated
/// as "no time information" and skipped; sequence-index fallbacks are
/// bucketed literally (they all land in hour 0 of the epoch), which only
/// matters for uploads with no usable time column at all.
pub fn hourly_pick_counts(selected: &[String], set: &WaveRouteSet) -> [u32; 24] {
    let mut hours = [0u32; 24];

    for wave_id in selected {
        let Some(route) = set.route(wave_id) else {
            continue;
        };
        for step in route {
            if step.timestamp == 0 {
                continue;
            }
            if let Some(dt) = DateTime::from_timestamp_millis(step.timestamp) {
                hours[dt.hour() as usize] += 1;
            }
        }
    }

    hours
}
