//! Derived efficiency metrics.
//!
//! Pure arithmetic over already-computed aggregates — no iteration, no
//! access to routes or geometry.  Every ratio yields 0 on a non-positive
//! denominator; nothing here can produce NaN or an error.

/// Derived efficiency and quality ratios for a selection (or single wave).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnhancedMetrics {
    /// Units picked per hour of trusted time.
    pub picks_per_hour: f64,
    /// Metres travelled per unit picked.
    pub distance_per_unit_m: f64,
    /// `ideal / actual × 100`.  Unclamped: the ideal baseline is a
    /// nearest-neighbor heuristic, so values above 100 are possible and
    /// meaningful ("the heuristic found no better tour").
    pub path_efficiency_pct: f64,
    /// Metres travelled per minute of trusted time.
    pub travel_speed_m_per_min: f64,
    /// `max(0, actual − ideal)` metres.
    pub wasted_distance_m: f64,
    /// Total revisits (all granularities) per 100 units.
    pub revisit_rate_pct: f64,
    /// The ideal-distance input, echoed for display alongside the ratios.
    pub ideal_distance_m: f64,
}

impl EnhancedMetrics {
    /// Derive all ratios from a selection's aggregates.
    pub fn derive(
        total_distance_m: f64,
        total_time_secs:  f64,
        total_revisits:   u32,
        total_units:      u32,
        ideal_distance_m: f64,
    ) -> Self {
        let hours = total_time_secs / 3_600.0;
        let minutes = total_time_secs / 60.0;
        let units = f64::from(total_units);

        Self {
            picks_per_hour: ratio(units, hours),
            distance_per_unit_m: ratio(total_distance_m, units),
            path_efficiency_pct: if ideal_distance_m > 0.0 && total_distance_m > 0.0 {
                ideal_distance_m / total_distance_m * 100.0
            } else {
                0.0
            },
            travel_speed_m_per_min: ratio(total_distance_m, minutes),
            wasted_distance_m: (total_distance_m - ideal_distance_m).max(0.0),
            revisit_rate_pct: ratio(f64::from(total_revisits) * 100.0, units),
            ideal_distance_m,
        }
    }
}

/// `num / den`, or 0 when the denominator is not strictly positive.
#[inline]
fn ratio(num: f64, den: f64) -> f64 {
    if den > 0.0 { num / den } else { 0.0 }
}
