//! Discretization of a solved profile into a chart-ready sample series.

use crate::phase::PhasePoly;
use crate::profile::ProfileSample;
use crate::solver::{EPSILON, STANDARD_GRAVITY};

/// Default number of points in the sampled series. A display-resolution
/// choice, not a physical constant; override with
/// [`crate::solver::solve_sampled`].
pub const SAMPLE_COUNT: usize = 300;

/// Evaluates the phase sequence on an evenly spaced time grid over
/// `[0, total_time]`.
///
/// The terminal sample is snapped to zero speed and zero deceleration to
/// remove residual floating error at the stop boundary. Returns an empty
/// series when `total_time <= 0` (failed or degenerate solve). The series is
/// rebuilt in full on every call.
pub(crate) fn sample(phases: &[PhasePoly; 3], total_time: f64, count: usize) -> Vec<ProfileSample> {
    if total_time <= 0.0 {
        return Vec::new();
    }

    let count = count.max(2);
    let dt = total_time / (count - 1) as f64;

    let mut series = Vec::with_capacity(count);
    for i in 0..count {
        let t = i as f64 * dt;
        let (pos, mut vel, acc) = eval_at(phases, t);

        // Deceleration is reported positive; the ramp-down tail is clamped
        // so residual floating error never shows as negative deceleration.
        let mut a_g = (-acc / STANDARD_GRAVITY).max(0.0);

        if i == count - 1 {
            // Snap the very last point to the exact stop state.
            vel = 0.0;
            a_g = 0.0;
        }

        series.push(ProfileSample { t, a_g, vel, pos });
    }
    series
}

/// Picks the phase containing grid time `t` and evaluates it locally.
fn eval_at(phases: &[PhasePoly; 3], t: f64) -> (f64, f64, f64) {
    let t1 = phases[0].time;
    let t2 = phases[1].time;

    if t <= t1 + EPSILON {
        phases[0].eval(t)
    } else if t <= t1 + t2 + EPSILON {
        phases[1].eval(t - t1)
    } else {
        phases[2].eval(t - t1 - t2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ArrestInput;
    use crate::solver::{solve, solve_sampled};
    use approx::assert_relative_eq;

    #[test]
    fn series_has_fixed_length_and_even_spacing() {
        let result = solve(&ArrestInput::new(6.0, 1300.0, 42.0));
        assert_eq!(result.samples.len(), SAMPLE_COUNT);

        let dt = result.total_time / (SAMPLE_COUNT - 1) as f64;
        for (i, point) in result.samples.iter().enumerate() {
            assert_relative_eq!(point.t, i as f64 * dt, epsilon = 1e-12);
        }
    }

    #[test]
    fn series_endpoints_are_exact() {
        let result = solve(&ArrestInput::new(6.0, 1300.0, 20.0));
        let first = result.samples.first().unwrap();
        let last = result.samples.last().unwrap();

        assert_eq!(first.t, 0.0);
        assert_relative_eq!(first.vel, result.v0, epsilon = 1e-12);
        assert_eq!(first.a_g, 0.0);
        assert_eq!(first.pos, 0.0);

        assert_relative_eq!(last.t, result.total_time, epsilon = 1e-12);
        assert_eq!(last.vel, 0.0);
        assert_eq!(last.a_g, 0.0);
        assert_relative_eq!(last.pos, result.stop_distance, epsilon = 1e-9);
    }

    #[test]
    fn speed_never_increases_and_displacement_never_decreases() {
        for max_g in [20.0, 42.0] {
            let result = solve(&ArrestInput::new(6.0, 1300.0, max_g));
            for pair in result.samples.windows(2) {
                assert!(pair[1].vel <= pair[0].vel + 1e-9);
                assert!(pair[1].pos >= pair[0].pos - 1e-9);
            }
        }
    }

    #[test]
    fn deceleration_stays_non_negative() {
        let result = solve(&ArrestInput::new(6.0, 1300.0, 20.0));
        assert!(result.samples.iter().all(|p| p.a_g >= 0.0));
    }

    #[test]
    fn sample_count_is_configurable() {
        let input = ArrestInput::new(6.0, 1300.0, 42.0);
        assert_eq!(solve_sampled(&input, 50).samples.len(), 50);
        // Degenerate counts are raised to the 2-point minimum.
        assert_eq!(solve_sampled(&input, 0).samples.len(), 2);
    }

    #[test]
    fn sampled_displacement_integrates_the_speed_curve() {
        // Trapezoid-rule integral of v(t) over the series must reproduce the
        // closed-form stop distance.
        let result = solve(&ArrestInput::new(6.0, 1300.0, 20.0));
        let dt = result.total_time / (result.samples.len() - 1) as f64;
        let integral: f64 = result
            .samples
            .windows(2)
            .map(|pair| 0.5 * (pair[0].vel + pair[1].vel) * dt)
            .sum();

        assert_relative_eq!(integral, result.stop_distance, epsilon = 1e-6);
    }
}
