//! Error types for experiment significance evaluation.
//!
//! All variants are deterministic input-validation failures detected at
//! the evaluator boundary; none are transient and none are retried.
//! Callers surface the messages to the user as-is.

use thiserror::Error;

/// Errors that can occur when evaluating an A/B experiment.
///
/// Variants are mutually exclusive; validation short-circuits on the
/// first matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignificanceError {
    /// One of the four counts is non-finite or negative.
    #[error("inputs must be finite, non-negative numbers")]
    InvalidInput,

    /// Conversions exceed visitors for at least one variant.
    #[error("conversions cannot exceed visitors")]
    ConversionsExceedVisitors,

    /// A variant has zero visitors, so its rate is undefined.
    #[error("visitors must be greater than zero for both variants")]
    ZeroVisitors,

    /// Pooled standard error is zero; there is no variability to compare.
    #[error("standard error is zero, no variability to compare")]
    NoVariability,
}

/// Result type alias for significance evaluation.
pub type Result<T> = std::result::Result<T, SignificanceError>;
