use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use osint_scrubber::cli::Cli;
use osint_scrubber::config::Config;
use osint_scrubber::pipeline;

/// Main entry point.
///
/// Loads `.env`, initializes tracing on stderr, parses the command line and
/// runs the pipeline. Any fatal error ends the process with a non-zero status.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "osint_scrubber=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Exits with a usage error before any network activity.
    let cli = Cli::parse();
    let config = Config::from_cli(cli)?;

    if let Err(e) = pipeline::run(&config).await {
        tracing::error!("Run failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
