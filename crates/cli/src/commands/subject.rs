//! Subject-line scoring CLI command.

use anyhow::Result;
use campaign_kit_content::{score_subject, SubjectScore};
use campaign_kit_core::config::AppConfig;
use clap::Args;

/// Arguments for the subject command.
#[derive(Args, Debug, Clone)]
pub struct SubjectArgs {
    /// Subject line to score
    pub text: String,

    /// Emit the raw score as JSON
    #[arg(long)]
    pub json: bool,
}

/// Runs the subject command.
///
/// # Errors
/// Returns an error only if JSON serialization fails.
pub fn run_subject(args: &SubjectArgs, config: &AppConfig) -> Result<()> {
    let scored = score_subject(&args.text, &config.subject);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scored)?);
    } else {
        println!("{}", render(&scored));
    }
    Ok(())
}

fn render(scored: &SubjectScore) -> String {
    let mut out = format!("Score: {}/100", scored.score);
    for note in &scored.notes {
        out.push_str(&format!("\n- {note}"));
    }
    out
}
