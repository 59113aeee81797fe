mod browse;
mod listing;

use clap::{Parser, Subcommand};
use landbank_client::LandbankClient;
use tracing_subscriber::EnvFilter;

use crate::browse::BrowseArgs;

#[derive(Debug, Parser)]
#[command(name = "landbank-cli")]
#[command(about = "Browse LandBank land listings from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search public listings with marketplace filters
    Browse(BrowseArgs),
    /// Show one listing in detail
    Show {
        /// Listing ad ID (e.g., AD-1042)
        ad_id: String,
    },
    /// Show a merchant profile and its listings
    Merchant {
        /// Merchant code
        code: String,
        /// Number of listings to fetch
        #[arg(long, default_value = "100")]
        page_size: u32,
    },
    /// List the accepted filter values
    Options,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = landbank_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = LandbankClient::from_config(&config)?;
    tracing::debug!(upstream = %config.api_base_url, "landbank client ready");

    match cli.command {
        Commands::Browse(args) => browse::run_browse(&client, &args).await,
        Commands::Show { ad_id } => listing::run_show(&client, &ad_id).await,
        Commands::Merchant { code, page_size } => {
            listing::run_merchant(&client, &code, page_size).await
        }
        Commands::Options => {
            listing::run_options();
            Ok(())
        }
    }
}
