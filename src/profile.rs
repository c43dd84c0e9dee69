//! Public data model for the arrest solver: inputs, the solved profile
//! snapshot, and the chart sample point.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metrics;

/// Raw scalar inputs describing one impact scenario.
///
/// Negative values are neutralized to zero by the solver; zero values fail
/// validation with the matching [`InputError`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrestInput {
    /// Impact speed, m/s.
    pub v0: f64,
    /// Jerk (rate-of-onset) limit, G per second.
    pub jerk_g: f64,
    /// Peak deceleration limit, G.
    pub max_g: f64,
    /// Allowed dwell at/above the peak-G cap, milliseconds.
    /// Infinite by default, which disables the dwell check.
    #[serde(default = "unbounded_dwell")]
    pub max_g_time_ms: f64,
}

fn unbounded_dwell() -> f64 {
    f64::INFINITY
}

impl Default for ArrestInput {
    fn default() -> Self {
        Self {
            v0: 0.0,
            jerk_g: 0.0,
            max_g: 0.0,
            max_g_time_ms: f64::INFINITY,
        }
    }
}

impl ArrestInput {
    /// Creates an input from the three core scalars, with no dwell constraint.
    pub fn new(v0: f64, jerk_g: f64, max_g: f64) -> Self {
        Self {
            v0,
            jerk_g,
            max_g,
            max_g_time_ms: f64::INFINITY,
        }
    }

    /// Sets the allowed dwell at/above the peak-G cap, in milliseconds.
    pub fn with_dwell_allowance(mut self, max_g_time_ms: f64) -> Self {
        self.max_g_time_ms = max_g_time_ms;
        self
    }
}

/// Shape of the solved deceleration profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// Two-phase ramp-up/ramp-down: the jerk limit alone is binding.
    Triangular,
    /// Three-phase with a constant-deceleration plateau at the peak-G cap.
    Trapezoidal,
}

/// Validation failures, one per input scalar.
///
/// These are expected conditions reported through [`ArrestResult::reason`],
/// never through a `Result` from the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum InputError {
    #[error("Impact speed must be > 0 m/s")]
    NonPositiveSpeed,
    #[error("Max jerk must be > 0 G/s")]
    NonPositiveJerk,
    #[error("Max G must be > 0 G")]
    NonPositiveGCap,
}

/// One point of the discretized profile, for charting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProfileSample {
    /// Elapsed time since impact, s.
    pub t: f64,
    /// Deceleration, G (reported positive).
    pub a_g: f64,
    /// Residual speed, m/s.
    pub vel: f64,
    /// Cumulative displacement, m.
    pub pos: f64,
}

/// Immutable snapshot of one solved arrest event.
///
/// Constructed fresh by [`crate::solver::solve`] on every call. When
/// `ok` is false every solved quantity is zero, `kind` is `None` and
/// `samples` is empty; only the echoed (normalized) inputs are kept.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArrestResult {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<InputError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ProfileKind>,

    /// Echoed normalized inputs.
    pub v0: f64,
    pub jerk_g: f64,
    pub max_g: f64,
    pub max_g_time_ms: f64,

    /// Jerk limit in SI units, m/s^3.
    pub jerk: f64,
    /// Peak deceleration, m/s^2.
    pub peak_a: f64,
    /// Peak deceleration, G.
    pub peak_g: f64,

    /// Ramp time (each side), s.
    pub t1: f64,
    /// Plateau duration, s. Zero for triangular profiles.
    pub t2: f64,
    /// Total stop time `2*t1 + t2`, s.
    pub total_time: f64,
    /// Total displacement from impact to full stop, m.
    pub stop_distance: f64,

    /// True iff the peak-G cap was the binding constraint (trapezoidal).
    pub g_limit_reached: bool,
    /// Exact dwell at/above 38 G, s.
    pub time_over_38g: f64,
    /// Exact dwell at/above 20 G, s.
    pub time_over_20g: f64,
    /// Dwell at the peak-G cap (the plateau duration when the cap binds), s.
    pub time_at_limit: f64,
    /// True iff `time_at_limit` stays within the input dwell allowance.
    pub dwell_ok: bool,

    pub samples: Vec<ProfileSample>,
}

impl Default for ArrestResult {
    fn default() -> Self {
        Self {
            ok: false,
            reason: None,
            kind: None,
            v0: 0.0,
            jerk_g: 0.0,
            max_g: 0.0,
            max_g_time_ms: f64::INFINITY,
            jerk: 0.0,
            peak_a: 0.0,
            peak_g: 0.0,
            t1: 0.0,
            t2: 0.0,
            total_time: 0.0,
            stop_distance: 0.0,
            g_limit_reached: false,
            time_over_38g: 0.0,
            time_over_20g: 0.0,
            time_at_limit: 0.0,
            dwell_ok: true,
            samples: Vec::new(),
        }
    }
}

impl ArrestResult {
    /// Zeroed result for a failed validation, keeping the normalized inputs.
    pub(crate) fn rejected(input: &ArrestInput, reason: InputError) -> Self {
        Self {
            reason: Some(reason),
            v0: input.v0,
            jerk_g: input.jerk_g,
            max_g: input.max_g,
            max_g_time_ms: input.max_g_time_ms,
            ..Self::default()
        }
    }

    /// Exact dwell at/above an arbitrary deceleration threshold, in seconds.
    ///
    /// Solved from the phase boundary equations, so the value is independent
    /// of the sample resolution.
    pub fn time_over(&self, threshold_g: f64) -> f64 {
        metrics::time_over_threshold(self.peak_a, self.jerk, self.t1, self.t2, threshold_g)
    }

    /// True when the profile dwells at/above 38 G or 20 G for longer than the
    /// draft-norm limits ([`metrics::DWELL_LIMIT_38G`], [`metrics::DWELL_LIMIT_20G`]).
    pub fn over_dwell_limits(&self) -> bool {
        self.time_over_38g >= metrics::DWELL_LIMIT_38G
            || self.time_over_20g >= metrics::DWELL_LIMIT_20G
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_strings_are_stable() {
        assert_eq!(
            InputError::NonPositiveSpeed.to_string(),
            "Impact speed must be > 0 m/s"
        );
        assert_eq!(
            InputError::NonPositiveJerk.to_string(),
            "Max jerk must be > 0 G/s"
        );
        assert_eq!(InputError::NonPositiveGCap.to_string(), "Max G must be > 0 G");
    }

    #[test]
    fn rejected_result_is_zeroed() {
        let input = ArrestInput::new(0.0, 1300.0, 42.0);
        let result = ArrestResult::rejected(&input, InputError::NonPositiveSpeed);

        assert!(!result.ok);
        assert_eq!(result.reason, Some(InputError::NonPositiveSpeed));
        assert_eq!(result.kind, None);
        assert_eq!(result.peak_g, 0.0);
        assert_eq!(result.t1, 0.0);
        assert_eq!(result.total_time, 0.0);
        assert_eq!(result.stop_distance, 0.0);
        assert!(result.samples.is_empty());
        // Inputs are echoed, not zeroed.
        assert_eq!(result.jerk_g, 1300.0);
        assert_eq!(result.max_g, 42.0);
    }

    #[test]
    fn default_input_has_no_dwell_constraint() {
        let input = ArrestInput::new(6.0, 1300.0, 42.0);
        assert!(input.max_g_time_ms.is_infinite());

        let bounded = input.with_dwell_allowance(15.0);
        assert_eq!(bounded.max_g_time_ms, 15.0);
    }
}
