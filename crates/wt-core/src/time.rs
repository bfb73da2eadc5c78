//! Time constants and display helpers.
//!
//! Inter-pick gaps come from operator-entered scan times, which contain
//! breaks, shift ends, and clock corrections.  A gap is *trusted* — counted
//! toward totals and per-pick timing — only when it is strictly positive and
//! strictly under one hour.  Untrusted gaps are excluded from aggregates,
//! never treated as errors.

/// Upper bound (exclusive) on a trusted inter-pick gap, in seconds.
pub const TRUSTED_GAP_CEILING_SECS: f64 = 3_600.0;

/// `true` if an inter-pick gap should count toward time aggregates.
#[inline]
pub fn is_trusted_gap(secs: f64) -> bool {
    secs > 0.0 && secs < TRUSTED_GAP_CEILING_SECS
}

/// Format a duration in seconds as `m:ss`, or `h:mm:ss` above one hour.
///
/// Non-positive and non-finite inputs render as `0:00`.
pub fn format_duration(secs: f64) -> String {
    if !secs.is_finite() || secs <= 0.0 {
        return "0:00".to_string();
    }
    let total = secs as u64;
    let hours = total / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
