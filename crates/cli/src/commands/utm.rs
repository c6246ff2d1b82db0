//! UTM URL builder CLI command.

use anyhow::Result;
use campaign_kit_utm::{build_utm_url, UtmParams};
use clap::{Args, ValueEnum};

/// Arguments for the utm command.
#[derive(Args, Debug, Clone)]
pub struct UtmArgs {
    /// Base URL to tag
    #[arg(long)]
    pub base_url: String,

    /// Start from a preset; explicit flags below override its fields
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Traffic source (utm_source)
    #[arg(long)]
    pub source: Option<String>,

    /// Marketing medium (utm_medium)
    #[arg(long)]
    pub medium: Option<String>,

    /// Campaign name (utm_campaign)
    #[arg(long)]
    pub campaign: Option<String>,

    /// Content differentiator (utm_content)
    #[arg(long)]
    pub content: Option<String>,

    /// Paid search keyword (utm_term)
    #[arg(long)]
    pub term: Option<String>,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Campaign presets matching common channel setups.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// newsletter / email / weekly_update
    Email,
    /// meta / paid_social / prospecting
    PaidSocial,
}

/// Runs the utm command.
///
/// # Errors
/// Returns an error if the base URL cannot be parsed.
pub fn run_utm(args: &UtmArgs) -> Result<()> {
    let params = merged_params(args);
    let url = build_utm_url(&args.base_url, &params)?;
    tracing::debug!(%url, "built campaign URL");

    if args.json {
        println!("{}", serde_json::json!({ "url": url }));
    } else {
        println!("{url}");
    }
    Ok(())
}

/// Seeds parameters from the preset, then overrides with explicit flags.
fn merged_params(args: &UtmArgs) -> UtmParams {
    let mut params = match args.preset {
        Some(Preset::Email) => UtmParams::email_newsletter(),
        Some(Preset::PaidSocial) => UtmParams::paid_social(),
        None => UtmParams::default(),
    };

    if args.source.is_some() {
        params.source = args.source.clone();
    }
    if args.medium.is_some() {
        params.medium = args.medium.clone();
    }
    if args.campaign.is_some() {
        params.campaign = args.campaign.clone();
    }
    if args.content.is_some() {
        params.content = args.content.clone();
    }
    if args.term.is_some() {
        params.term = args.term.clone();
    }

    params
}
