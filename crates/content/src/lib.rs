//! Content quality calculators: SEO metadata length checks and email
//! subject-line heuristic scoring.

pub mod seo;
pub mod subject;

pub use seo::{evaluate_metadata, SeoReport};
pub use subject::{score_subject, SubjectScore};
