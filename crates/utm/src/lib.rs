//! UTM-tagged URL construction.
//!
//! Builds campaign tracking URLs by setting the five standard `utm_*`
//! query parameters on a base URL. Values are trimmed, empty values are
//! skipped, and an existing tag with the same key is replaced rather
//! than duplicated. Unrelated query parameters are preserved.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Errors that can occur when building a UTM URL.
#[derive(Debug, Error)]
pub enum UtmError {
    /// The base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Result type alias for UTM operations.
pub type Result<T> = std::result::Result<T, UtmError>;

/// Campaign parameters mapped onto the standard `utm_*` query keys.
///
/// Every field is optional; absent or blank fields simply do not appear
/// in the built URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtmParams {
    /// Traffic source (`utm_source`), e.g. "newsletter".
    pub source: Option<String>,
    /// Marketing medium (`utm_medium`), e.g. "email".
    pub medium: Option<String>,
    /// Campaign name (`utm_campaign`).
    pub campaign: Option<String>,
    /// Content differentiator (`utm_content`), e.g. an ad variant.
    pub content: Option<String>,
    /// Paid search keyword (`utm_term`).
    pub term: Option<String>,
}

impl UtmParams {
    /// Preset for email newsletter campaigns.
    #[must_use]
    pub fn email_newsletter() -> Self {
        Self {
            source: Some("newsletter".to_string()),
            medium: Some("email".to_string()),
            campaign: Some("weekly_update".to_string()),
            ..Self::default()
        }
    }

    /// Preset for paid social prospecting campaigns.
    #[must_use]
    pub fn paid_social() -> Self {
        Self {
            source: Some("meta".to_string()),
            medium: Some("paid_social".to_string()),
            campaign: Some("prospecting".to_string()),
            ..Self::default()
        }
    }

    /// Returns the `(key, value)` pairs that should appear in the URL:
    /// present, trimmed, non-empty.
    fn tags(&self) -> Vec<(&'static str, &str)> {
        [
            ("utm_source", &self.source),
            ("utm_medium", &self.medium),
            ("utm_campaign", &self.campaign),
            ("utm_content", &self.content),
            ("utm_term", &self.term),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
        .collect()
    }
}

/// Builds a campaign URL by setting the non-empty UTM tags on `base_url`.
///
/// Each tag replaces an existing query pair with the same key; all other
/// query pairs are kept in order.
///
/// # Errors
///
/// Returns [`UtmError::InvalidBaseUrl`] if `base_url` does not parse.
///
/// # Examples
/// ```
/// use campaign_kit_utm::{build_utm_url, UtmParams};
///
/// let mut params = UtmParams::email_newsletter();
/// params.content = Some("header_cta".to_string());
///
/// let url = build_utm_url("https://example.com/landing", &params).unwrap();
/// assert!(url.contains("utm_source=newsletter"));
/// assert!(url.contains("utm_content=header_cta"));
/// ```
pub fn build_utm_url(base_url: &str, params: &UtmParams) -> Result<String> {
    let mut url = Url::parse(base_url)?;
    let tags = params.tags();
    if tags.is_empty() {
        return Ok(url.to_string());
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !tags.iter().any(|(tag, _)| *tag == key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        for (key, value) in &tags {
            pairs.append_pair(key, value);
        }
    }

    Ok(url.to_string())
}
