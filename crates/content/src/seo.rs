//! SEO metadata length evaluation.
//!
//! Search engines truncate titles and meta descriptions outside fairly
//! narrow length bands. This module measures both fields and reports
//! whether they fall inside the configured bounds.

use campaign_kit_core::config::SeoLimits;
use serde::{Deserialize, Serialize};

/// Lengths and in-range verdicts for a title / meta description pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoReport {
    /// Character count of the trimmed title.
    pub title_len: usize,
    /// Character count of the trimmed description.
    pub description_len: usize,
    /// True if the title length is inside the configured bounds.
    pub title_in_range: bool,
    /// True if the description length is inside the configured bounds.
    pub description_in_range: bool,
}

/// Measures a title and meta description against the configured bounds.
///
/// Both inputs are trimmed before counting. Lengths are Unicode scalar
/// counts. Bounds are inclusive on both ends.
///
/// # Examples
/// ```
/// use campaign_kit_content::evaluate_metadata;
/// use campaign_kit_core::config::SeoLimits;
///
/// let report = evaluate_metadata(
///     "How to Plan a Product Launch in 2026",
///     "A short description.",
///     &SeoLimits::default(),
/// );
/// assert!(report.title_in_range);
/// assert!(!report.description_in_range);
/// ```
#[must_use]
pub fn evaluate_metadata(title: &str, description: &str, limits: &SeoLimits) -> SeoReport {
    let title_len = title.trim().chars().count();
    let description_len = description.trim().chars().count();

    SeoReport {
        title_len,
        description_len,
        title_in_range: title_len >= limits.title_min && title_len <= limits.title_max,
        description_in_range: description_len >= limits.description_min
            && description_len <= limits.description_max,
    }
}
