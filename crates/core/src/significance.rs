//! Two-proportion z-test for A/B experiment decision support.
//!
//! Compares the conversion rates of a control and a treatment variant
//! under the null hypothesis of no difference, using the pooled-proportion
//! standard error and a two-sided p-value from the normal approximation.
//! Quick decision support, not a full experimentation platform: there is
//! no sequential testing or multiple-comparison correction, and nothing
//! is reported beyond the point estimates and p-value.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SignificanceError};
use crate::normal::standard_normal_cdf;

/// Floor applied to the lift denominator when the control rate is exactly
/// zero. Keeps the lift finite and signed correctly, at the cost of a very
/// large magnitude; the true relative lift from a zero base is undefined.
const LIFT_DENOMINATOR_FLOOR: f64 = 1e-12;

/// Visitor and conversion counts for both variants of an experiment.
///
/// Counts are real numbers rather than integers so callers can pass
/// whatever their text parsing produced; validation rejects negative and
/// non-finite values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentInput {
    /// Visitors exposed to the control variant.
    pub control_visitors: f64,
    /// Conversions recorded for the control variant.
    pub control_conversions: f64,
    /// Visitors exposed to the treatment variant.
    pub treatment_visitors: f64,
    /// Conversions recorded for the treatment variant.
    pub treatment_conversions: f64,
}

impl ExperimentInput {
    /// Creates an input from the four raw counts.
    #[must_use]
    pub fn new(
        control_visitors: f64,
        control_conversions: f64,
        treatment_visitors: f64,
        treatment_conversions: f64,
    ) -> Self {
        Self {
            control_visitors,
            control_conversions,
            treatment_visitors,
            treatment_conversions,
        }
    }
}

/// Variant favored by the observed rates.
///
/// Derived from the rate comparison alone; a winner can be reported even
/// when the difference is not statistically significant. Combine with
/// [`ExperimentResult::is_significant`] for a final call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// Control converted better.
    Control,
    /// Treatment converted better.
    Treatment,
    /// Both rates are exactly equal.
    Tie,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Control => write!(f, "Control"),
            Self::Treatment => write!(f, "Treatment"),
            Self::Tie => write!(f, "Tie"),
        }
    }
}

/// Result of a two-proportion z-test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResult {
    /// Observed control conversion rate, in [0, 1].
    pub control_rate: f64,
    /// Observed treatment conversion rate, in [0, 1].
    pub treatment_rate: f64,
    /// Standardized difference between the two rates (treatment minus control).
    pub z_statistic: f64,
    /// Two-sided p-value under the null hypothesis of no difference, in [0, 1].
    pub two_sided_p_value: f64,
    /// Relative change of the treatment rate versus the control rate.
    pub relative_lift: f64,
    /// Variant favored by the observed rates.
    pub winner: Winner,
}

impl ExperimentResult {
    /// Returns true if the two-sided p-value is below `alpha`.
    #[must_use]
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.two_sided_p_value < alpha
    }
}

/// Evaluates a two-variant experiment with a two-proportion z-test.
///
/// Validation short-circuits in order: non-finite or negative counts,
/// conversions exceeding visitors, zero visitors, zero pooled standard
/// error. On success every field of [`ExperimentResult`] is populated; on
/// failure no partial result is returned.
///
/// Purely functional: no I/O, no shared state, deterministic for
/// identical inputs.
///
/// # Errors
///
/// Returns a [`SignificanceError`] describing the first validation rule
/// the input violates.
///
/// # Examples
/// ```
/// use campaign_kit_core::significance::{evaluate, ExperimentInput, Winner};
///
/// let input = ExperimentInput::new(1000.0, 50.0, 1000.0, 80.0);
/// let result = evaluate(&input).unwrap();
///
/// assert_eq!(result.winner, Winner::Treatment);
/// assert!(result.two_sided_p_value < 0.05);
/// ```
pub fn evaluate(input: &ExperimentInput) -> Result<ExperimentResult> {
    let n1 = input.control_visitors;
    let x1 = input.control_conversions;
    let n2 = input.treatment_visitors;
    let x2 = input.treatment_conversions;

    if [n1, x1, n2, x2].iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(SignificanceError::InvalidInput);
    }
    if x1 > n1 || x2 > n2 {
        return Err(SignificanceError::ConversionsExceedVisitors);
    }
    if n1 == 0.0 || n2 == 0.0 {
        return Err(SignificanceError::ZeroVisitors);
    }

    let p1 = x1 / n1;
    let p2 = x2 / n2;

    // Pooled proportion under H0: both variants share one conversion rate.
    let pooled = (x1 + x2) / (n1 + n2);
    let standard_error = (pooled * (1.0 - pooled) * (1.0 / n1 + 1.0 / n2)).sqrt();
    if standard_error == 0.0 {
        return Err(SignificanceError::NoVariability);
    }

    let z = (p2 - p1) / standard_error;
    let two_sided_p_value = 2.0 * (1.0 - standard_normal_cdf(z.abs()));

    let denominator = if p1 == 0.0 { LIFT_DENOMINATOR_FLOOR } else { p1 };
    let relative_lift = (p2 - p1) / denominator;

    let winner = if p2 > p1 {
        Winner::Treatment
    } else if p1 > p2 {
        Winner::Control
    } else {
        Winner::Tie
    };

    Ok(ExperimentResult {
        control_rate: p1,
        treatment_rate: p2,
        z_statistic: z,
        two_sided_p_value,
        relative_lift,
        winner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(n1: f64, x1: f64, n2: f64, x2: f64) -> Result<ExperimentResult> {
        evaluate(&ExperimentInput::new(n1, x1, n2, x2))
    }

    // ============================================
    // Success Scenarios
    // ============================================

    #[test]
    fn clear_treatment_win_is_significant() {
        let result = eval(1000.0, 50.0, 1000.0, 80.0).unwrap();

        assert!((result.control_rate - 0.05).abs() < 1e-12);
        assert!((result.treatment_rate - 0.08).abs() < 1e-12);
        assert_eq!(result.winner, Winner::Treatment);
        assert!(result.z_statistic > 0.0);
        assert!(
            result.two_sided_p_value < 0.05,
            "p-value was {}",
            result.two_sided_p_value
        );
        assert!(result.is_significant(0.05));
    }

    #[test]
    fn identical_counts_tie_with_p_value_one() {
        let result = eval(1000.0, 50.0, 1000.0, 50.0).unwrap();

        assert_eq!(result.winner, Winner::Tie);
        assert!((result.z_statistic).abs() < f64::EPSILON);
        assert!(
            (result.two_sided_p_value - 1.0).abs() < 1e-7,
            "p-value was {}",
            result.two_sided_p_value
        );
        assert!((result.relative_lift).abs() < f64::EPSILON);
        assert!(!result.is_significant(0.05));
    }

    #[test]
    fn small_difference_not_significant_but_has_winner() {
        // 5.0% vs 5.2% on 1000 visitors each is well within noise
        let result = eval(1000.0, 50.0, 1000.0, 52.0).unwrap();

        assert_eq!(result.winner, Winner::Treatment);
        assert!(
            result.two_sided_p_value > 0.05,
            "p-value was {}",
            result.two_sided_p_value
        );
        assert!(!result.is_significant(0.05));
    }

    #[test]
    fn control_win_has_negative_z() {
        let result = eval(1000.0, 80.0, 1000.0, 50.0).unwrap();

        assert_eq!(result.winner, Winner::Control);
        assert!(result.z_statistic < 0.0);
        assert!(result.relative_lift < 0.0);
    }

    #[test]
    fn lift_is_relative_change_of_treatment_over_control() {
        let result = eval(1000.0, 50.0, 1000.0, 80.0).unwrap();
        // (0.08 - 0.05) / 0.05 = 0.6
        assert!((result.relative_lift - 0.6).abs() < 1e-9);
    }

    #[test]
    fn zero_control_rate_yields_huge_finite_lift() {
        let result = eval(1000.0, 0.0, 1000.0, 50.0).unwrap();

        assert!(result.relative_lift.is_finite());
        assert!(result.relative_lift > 1e9, "lift was {}", result.relative_lift);
        assert_eq!(result.winner, Winner::Treatment);
    }

    #[test]
    fn fractional_counts_are_accepted() {
        let result = eval(1000.5, 50.25, 999.5, 80.75).unwrap();
        assert_eq!(result.winner, Winner::Treatment);
    }

    // ============================================
    // Properties
    // ============================================

    #[test]
    fn rates_and_p_value_stay_in_unit_interval() {
        let cases = [
            (10.0, 0.0, 10.0, 10.0),
            (500.0, 499.0, 500.0, 1.0),
            (3.0, 1.0, 7.0, 6.0),
            (100_000.0, 1.0, 100_000.0, 99_999.0),
        ];
        for (n1, x1, n2, x2) in cases {
            let result = eval(n1, x1, n2, x2).unwrap();
            assert!((0.0..=1.0).contains(&result.control_rate));
            assert!((0.0..=1.0).contains(&result.treatment_rate));
            assert!(
                (0.0..=1.0).contains(&result.two_sided_p_value),
                "p-value was {} for ({n1}, {x1}, {n2}, {x2})",
                result.two_sided_p_value
            );
        }
    }

    #[test]
    fn swapping_variants_negates_z_and_swaps_winner() {
        let forward = eval(1000.0, 50.0, 800.0, 70.0).unwrap();
        let swapped = eval(800.0, 70.0, 1000.0, 50.0).unwrap();

        assert!((forward.z_statistic + swapped.z_statistic).abs() < 1e-12);
        assert!((forward.two_sided_p_value - swapped.two_sided_p_value).abs() < 1e-12);
        assert_eq!(forward.winner, Winner::Treatment);
        assert_eq!(swapped.winner, Winner::Control);
    }

    #[test]
    fn winner_follows_rate_comparison() {
        let up = eval(200.0, 10.0, 200.0, 11.0).unwrap();
        assert_eq!(up.winner, Winner::Treatment);

        let down = eval(200.0, 11.0, 200.0, 10.0).unwrap();
        assert_eq!(down.winner, Winner::Control);

        // Same rate from different counts is still a tie
        let tie = eval(200.0, 10.0, 400.0, 20.0).unwrap();
        assert_eq!(tie.winner, Winner::Tie);
    }

    // ============================================
    // Validation Errors
    // ============================================

    #[test]
    fn negative_input_is_rejected() {
        assert_eq!(
            eval(1000.0, -1.0, 1000.0, 50.0),
            Err(SignificanceError::InvalidInput)
        );
    }

    #[test]
    fn non_finite_input_is_rejected() {
        assert_eq!(
            eval(f64::NAN, 50.0, 1000.0, 50.0),
            Err(SignificanceError::InvalidInput)
        );
        assert_eq!(
            eval(1000.0, 50.0, f64::INFINITY, 50.0),
            Err(SignificanceError::InvalidInput)
        );
    }

    #[test]
    fn conversions_above_visitors_are_rejected() {
        assert_eq!(
            eval(1000.0, 1200.0, 1000.0, 50.0),
            Err(SignificanceError::ConversionsExceedVisitors)
        );
        assert_eq!(
            eval(1000.0, 50.0, 1000.0, 1001.0),
            Err(SignificanceError::ConversionsExceedVisitors)
        );
    }

    #[test]
    fn zero_visitors_is_rejected_not_divided() {
        assert_eq!(
            eval(0.0, 0.0, 1000.0, 50.0),
            Err(SignificanceError::ZeroVisitors)
        );
        assert_eq!(
            eval(1000.0, 50.0, 0.0, 0.0),
            Err(SignificanceError::ZeroVisitors)
        );
    }

    #[test]
    fn no_conversions_at_all_has_no_variability() {
        assert_eq!(
            eval(1000.0, 0.0, 1000.0, 0.0),
            Err(SignificanceError::NoVariability)
        );
    }

    #[test]
    fn full_conversion_on_both_sides_has_no_variability() {
        assert_eq!(
            eval(1000.0, 1000.0, 1000.0, 1000.0),
            Err(SignificanceError::NoVariability)
        );
    }

    #[test]
    fn validation_order_reports_first_failing_rule() {
        // Negative count and conversions > visitors: InvalidInput wins
        assert_eq!(
            eval(-1.0, 5.0, 1000.0, 50.0),
            Err(SignificanceError::InvalidInput)
        );
        // Conversions > visitors and zero visitors: the exceed check wins
        assert_eq!(
            eval(0.0, 1.0, 1000.0, 50.0),
            Err(SignificanceError::ConversionsExceedVisitors)
        );
    }

    // ============================================
    // Serialization
    // ============================================

    #[test]
    fn result_serializes_with_named_winner() {
        let result = eval(1000.0, 50.0, 1000.0, 80.0).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"winner\":\"Treatment\""));
        assert!(json.contains("\"control_rate\""));
    }
}
