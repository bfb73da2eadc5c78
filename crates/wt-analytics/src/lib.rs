//! `wt-analytics` — the wave-route analytics engine of the wavetrace
//! workspace.
//!
//! Consumes the routes built by `wt-route` and the geometry derived by
//! `wt-layout`; produces revisit events, per-wave and selection metrics,
//! derived efficiency ratios, and visit-frequency data for heatmap
//! consumers.
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`revisit`]  | `RevisitDetector`, `RevisitEvent`, `KeyHistory`        |
//! | [`metrics`]  | `RouteAnalysis`, `WaveMetrics`, `SelectionAnalysis`    |
//! | [`ideal`]    | Nearest-neighbor ideal-distance baseline               |
//! | [`enhanced`] | `EnhancedMetrics` derived ratios                       |
//! | [`heatmap`]  | Chunked visit-frequency accumulator                    |
//! | [`sweep`]    | Chunked many-wave metrics sweep, abnormal waves        |
//! | [`sku`]      | Per-SKU pick statistics                                |
//! | [`hourly`]   | Hour-of-day pick distribution                          |
//!
//! # Concurrency model
//!
//! Single logical thread, cooperative scheduling.  Single-wave passes are
//! synchronous and bounded by one wave's step count.  The two analyses that
//! scale with (waves × steps) — heatmap accumulation and the metrics sweep —
//! advance in bounded work units and yield between them.  Each pass owns its
//! mutable state outright; selection changes are handled by dropping the
//! pass and constructing a fresh one, so overlapping passes over shared
//! state are unrepresentable.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs `MetricsSweep::run_to_end` on Rayon's thread pool. |
//! | `serde`    | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod enhanced;
pub mod heatmap;
pub mod hourly;
pub mod ideal;
pub mod metrics;
pub mod revisit;
pub mod sku;
pub mod sweep;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use enhanced::EnhancedMetrics;
pub use heatmap::{HEATMAP_CHUNK_STEPS, HeatmapAccumulator};
pub use hourly::hourly_pick_counts;
pub use ideal::ideal_distance_m;
pub use metrics::{
    AnalysisContext, PickTiming, RouteAnalysis, SelectionAnalysis, SelectionTotals, WaveMetrics,
    wave_metrics,
};
pub use revisit::{Granularity, KeyHistory, RevisitCounts, RevisitDetector, RevisitEvent};
pub use sku::SkuStats;
pub use sweep::{AbnormalWave, MetricsSweep, abnormal_waves};
