//! CLI commands for the campaign toolkit.

pub mod seo;
pub mod subject;
pub mod utm;

pub use ab_test::{run_ab_test, AbTestArgs};
pub use seo::{run_seo, SeoArgs};
pub use subject::{run_subject, SubjectArgs};
pub use utm::{run_utm, UtmArgs};
