//! SEO metadata length CLI command.

use anyhow::Result;
use campaign_kit_content::{evaluate_metadata, SeoReport};
use campaign_kit_core::config::{AppConfig, SeoLimits};
use clap::Args;

/// Arguments for the seo command.
#[derive(Args, Debug, Clone)]
pub struct SeoArgs {
    /// Page title
    #[arg(long)]
    pub title: String,

    /// Meta description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Emit the raw report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Runs the seo command.
///
/// # Errors
/// Returns an error only if JSON serialization fails.
pub fn run_seo(args: &SeoArgs, config: &AppConfig) -> Result<()> {
    let report = evaluate_metadata(&args.title, &args.description, &config.seo);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render(&report, &config.seo));
    }
    Ok(())
}

fn render(report: &SeoReport, limits: &SeoLimits) -> String {
    let title_verdict = if report.title_in_range {
        "ok".to_string()
    } else {
        format!("(aim {}-{})", limits.title_min, limits.title_max)
    };
    let description_verdict = if report.description_in_range {
        "ok".to_string()
    } else {
        format!("(aim {}-{})", limits.description_min, limits.description_max)
    };

    format!(
        "Title: {} chars {title_verdict}\nMeta:  {} chars {description_verdict}",
        report.title_len, report.description_len
    )
}
