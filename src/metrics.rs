//! Analytic dwell-time metrics and the foam-thickness conversion.

use crate::solver::{EPSILON, STANDARD_GRAVITY};

/// Draft-norm dwell limit at 38 G: 7 ms, in seconds.
pub const DWELL_LIMIT_38G: f64 = 0.007;

/// Draft-norm dwell limit at 20 G: 25 ms, in seconds.
pub const DWELL_LIMIT_20G: f64 = 0.025;

/// Exact dwell at/above `threshold_g`, solved from the phase boundaries.
///
/// Entry during ramp-up: `jerk * t_enter = threshold`. Exit during ramp-down:
/// `peak_a - jerk * sigma_exit = threshold`. The span between them covers the
/// plateau, which by construction sits at `peak_a` whenever the peak exceeds
/// the threshold. Independent of sample resolution.
pub(crate) fn time_over_threshold(
    peak_a: f64,
    jerk: f64,
    t1: f64,
    t2: f64,
    threshold_g: f64,
) -> f64 {
    let g = STANDARD_GRAVITY;
    let threshold_g = threshold_g.max(0.0);
    let peak_g = peak_a / g;

    if peak_g <= threshold_g + EPSILON {
        return 0.0;
    }

    let a_thr = threshold_g * g;
    let t_enter = a_thr / jerk;
    let sigma_exit = (peak_a - a_thr) / jerk;
    let t_exit = t1 + t2 + sigma_exit;

    t_exit - t_enter
}

/// Required uncompressed foam thickness for a compression distance `distance`
/// and a compression capacity of `compression_percent` percent of the
/// material's own thickness.
///
/// Uses the required-uncompressed-length formulation
/// `distance / (compression_percent / 100)`: foam that compresses by 70% of
/// itself needs `10 / 0.7 ≈ 14.29` units of thickness to yield 10 units of
/// stopping distance. Returns 0 for a non-positive capacity.
pub fn foam_thickness(distance: f64, compression_percent: f64) -> f64 {
    if compression_percent <= 0.0 {
        return 0.0;
    }
    distance / (compression_percent / 100.0)
}
