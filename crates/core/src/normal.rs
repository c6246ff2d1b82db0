//! Standard normal distribution approximations.
//!
//! Provides the error function and the standard normal CDF used by the
//! significance evaluator. Both are closed-form polynomial approximations,
//! so no special-function library or numerical integration is needed.

/// Error function approximation using the Abramowitz and Stegun formula
/// (7.1.26). Maximum absolute error is about 1.5e-7.
///
/// Odd function: `erf(-x) = -erf(x)`, `erf(0) = 0`, `erf(x) -> 1` as x
/// grows large.
///
/// # Examples
/// ```
/// use campaign_kit_core::normal::erf;
///
/// assert!((erf(1.0) - 0.8427).abs() < 1e-4);
/// assert!(erf(4.0) > 0.9999);
/// ```
#[must_use]
pub fn erf(x: f64) -> f64 {
    // Constants for Abramowitz and Stegun approximation (formula 7.1.26)
    let a1 = 0.254_829_592;
    let a2 = -0.284_496_736;
    let a3 = 1.421_413_741;
    let a4 = -1.453_152_027;
    let a5 = 1.061_405_429;
    let p = 0.327_591_1;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let ax = x.abs();

    let t = 1.0 / (1.0 + p * ax);
    let poly = ((((a5 * t + a4) * t + a3) * t + a2) * t + a1) * t;
    let y = 1.0 - poly * (-ax * ax).exp();

    sign * y
}

/// Standard normal cumulative distribution function.
///
/// `cdf(x) = 0.5 * (1 + erf(x / sqrt(2)))`, inheriting the accuracy of
/// the [`erf`] approximation.
///
/// # Examples
/// ```
/// use campaign_kit_core::normal::standard_normal_cdf;
///
/// let cdf = standard_normal_cdf(1.96);
/// assert!((cdf - 0.975).abs() < 0.001);
/// ```
#[must_use]
pub fn standard_normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}
