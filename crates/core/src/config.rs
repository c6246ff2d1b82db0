//! Application configuration.
//!
//! Section structs mirror the toolkit's calculators. Every section has
//! defaults matching the stock heuristics, so the binary runs with no
//! config file present; see [`crate::config_loader::ConfigLoader`] for
//! the merge order.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub experiment: ExperimentConfig,
    pub seo: SeoLimits,
    pub subject: SubjectConfig,
}

/// Settings for the A/B significance evaluator's presentation.
///
/// `alpha` drives only the significance label shown to the user; the
/// evaluator itself reports the raw p-value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Significance threshold for the human-readable label.
    pub alpha: f64,
}

/// Inclusive character-count bounds for SEO metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoLimits {
    pub title_min: usize,
    pub title_max: usize,
    pub description_min: usize,
    pub description_max: usize,
}

/// Settings for the subject-line scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectConfig {
    /// Terms penalized as spam signals, matched case-insensitively.
    pub spam_terms: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            experiment: ExperimentConfig::default(),
            seo: SeoLimits::default(),
            subject: SubjectConfig::default(),
        }
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self { alpha: 0.05 }
    }
}

impl Default for SeoLimits {
    fn default() -> Self {
        Self {
            title_min: 30,
            title_max: 60,
            description_min: 120,
            description_max: 160,
        }
    }
}

impl Default for SubjectConfig {
    fn default() -> Self {
        Self {
            spam_terms: [
                "free",
                "guaranteed",
                "winner",
                "act now",
                "urgent",
                "cash",
                "deal",
                "!!!",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}
