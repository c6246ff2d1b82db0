use clap::{Parser, Subcommand};

mod commands;

use campaign_kit_core::ConfigLoader;
use commands::{AbTestArgs, SeoArgs, SubjectArgs, UtmArgs};

#[derive(Parser)]
#[command(name = "campaign-kit")]
#[command(about = "Client-side calculators for everyday campaign work", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "config/Config.toml", global = true)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a two-proportion significance test on A/B experiment counts
    AbTest(AbTestArgs),
    /// Build a UTM-tagged campaign URL
    Utm(UtmArgs),
    /// Check SEO title and meta description lengths
    Seo(SeoArgs),
    /// Score an email subject line
    Subject(SubjectArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ConfigLoader::load_from(&cli.config)?;
    tracing::debug!(path = %cli.config, "configuration loaded");

    match cli.command {
        Commands::AbTest(args) => commands::run_ab_test(&args, &config),
        Commands::Utm(args) => commands::run_utm(&args),
        Commands::Seo(args) => commands::run_seo(&args, &config),
        Commands::Subject(args) => commands::run_subject(&args, &config),
    }
}
