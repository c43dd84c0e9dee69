//! Profile classification and the closed-form arrest solver.
//!
//! The solve runs in one synchronous pass: normalize the raw scalars,
//! validate them, decide whether the peak-G cap binds (triangular vs.
//! trapezoidal shape), solve the phase boundaries in closed form, then hand
//! the phase polynomials to the sampler and the dwell calculator. Identical
//! inputs always produce a bit-for-bit identical result.

use crate::metrics;
use crate::phase::PhasePoly;
use crate::profile::{ArrestInput, ArrestResult, InputError, ProfileKind};
use crate::sampler;

/// Standard gravity, m/s^2. One G of deceleration equals this.
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Tolerance absorbing floating round-off at phase and shape boundaries.
pub(crate) const EPSILON: f64 = 1e-12;

/// Solves one impact scenario at the default display resolution.
///
/// This is the sole entry point of the solver; see [`solve_sampled`] to pick
/// the sample count. Validation failures come back as a zeroed result with
/// `ok = false` and the matching [`InputError`], never as a panic or `Err`.
pub fn solve(input: &ArrestInput) -> ArrestResult {
    solve_sampled(input, sampler::SAMPLE_COUNT)
}

/// Solves one impact scenario, discretizing the profile into `sample_count`
/// points (minimum 2).
pub fn solve_sampled(input: &ArrestInput, sample_count: usize) -> ArrestResult {
    // Negative raw values are neutralized, not rejected; zero then fails the
    // positivity checks below.
    let v0 = input.v0.max(0.0);
    let jerk_g = input.jerk_g.max(0.0);
    let max_g = input.max_g.max(0.0);
    let max_g_time_ms = input.max_g_time_ms.max(0.0);

    let normalized = ArrestInput {
        v0,
        jerk_g,
        max_g,
        max_g_time_ms,
    };

    if v0 <= 0.0 {
        return ArrestResult::rejected(&normalized, InputError::NonPositiveSpeed);
    }
    if jerk_g <= 0.0 {
        return ArrestResult::rejected(&normalized, InputError::NonPositiveJerk);
    }
    if max_g <= 0.0 {
        return ArrestResult::rejected(&normalized, InputError::NonPositiveGCap);
    }

    let g = STANDARD_GRAVITY;
    let jerk = jerk_g * g; // m/s^3
    let a_cap = max_g * g; // m/s^2

    // Peak of a pure ramp-up/ramp-down profile that removes exactly v0 of
    // speed under constant jerk: v0 = a^2 / jerk  =>  a = sqrt(jerk * v0).
    let a_tri = (jerk * v0).sqrt();

    let kind;
    let peak_a;
    let t2;
    if a_tri <= a_cap + EPSILON {
        // The jerk limit alone is binding; no plateau.
        kind = ProfileKind::Triangular;
        peak_a = a_tri;
        t2 = 0.0;
    } else {
        // The cap binds first; hold it until the remaining speed is removed.
        // From v0 = peak_a^2 / jerk + peak_a * t2, clamped against underflow
        // right at the shape boundary.
        kind = ProfileKind::Trapezoidal;
        peak_a = a_cap;
        t2 = ((v0 - peak_a * peak_a / jerk) / peak_a).max(0.0);
    }

    let t1 = peak_a / jerk;
    let total_time = 2.0 * t1 + t2;
    let peak_g = peak_a / g;

    // Phase-end speeds and closed-form phase distances.
    let v1 = v0 - 0.5 * jerk * t1 * t1;
    let v2 = v1 - peak_a * t2;
    let s1 = v0 * t1 - jerk * t1 * t1 * t1 / 6.0;
    let s2 = v1 * t2 - 0.5 * peak_a * t2 * t2;
    // The ramp-down mirrors the ramp-up distance by construction.
    let s3 = jerk * t1 * t1 * t1 / 6.0;
    let stop_distance = s1 + s2 + s3;

    let phases = [
        PhasePoly::new(t1, 0.0, v0, 0.0, -jerk),
        PhasePoly::new(t2, s1, v1, -peak_a, 0.0),
        PhasePoly::new(t1, s1 + s2, v2, -peak_a, jerk),
    ];

    let g_limit_reached = kind == ProfileKind::Trapezoidal;
    let time_at_limit = if g_limit_reached { t2 } else { 0.0 };
    let dwell_ok = time_at_limit <= max_g_time_ms / 1e3 + EPSILON;

    ArrestResult {
        ok: true,
        reason: None,
        kind: Some(kind),
        v0,
        jerk_g,
        max_g,
        max_g_time_ms,
        jerk,
        peak_a,
        peak_g,
        t1,
        t2,
        total_time,
        stop_distance,
        g_limit_reached,
        time_over_38g: metrics::time_over_threshold(peak_a, jerk, t1, t2, 38.0),
        time_over_20g: metrics::time_over_threshold(peak_a, jerk, t1, t2, 20.0),
        time_at_limit,
        dwell_ok,
        samples: sampler::sample(&phases, total_time, sample_count),
    }
}
