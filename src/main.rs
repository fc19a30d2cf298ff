use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use ttycard::config::{Cli, Config};
use ttycard::github::GithubClient;
use ttycard::stats::StatsAggregator;
use ttycard::svg;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from(Cli::parse());
    tracing::info!(user = %config.username, "starting profile card generator");

    let client = GithubClient::new(&config).context("failed to build HTTP client")?;
    let aggregator = StatsAggregator::new(client, config.clone());
    let stats = aggregator
        .collect()
        .await
        .context("failed to collect profile stats")?;

    if !stats.skipped_repos().is_empty() {
        tracing::warn!(
            skipped = stats.skipped_repos().len(),
            "some repositories were left out of the commit total"
        );
    }

    tracing::info!("generating SVG");
    let doc = svg::build_document(&stats, &config, &Local::now());
    doc.write_to(&config.output)
        .with_context(|| format!("failed to generate {}", config.output.display()))?;

    tracing::info!(path = %config.output.display(), "card written");

    println!();
    print!("{}", stats.summary());

    Ok(())
}
