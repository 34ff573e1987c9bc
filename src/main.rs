use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use newswire::aggregator::aggregate;
use newswire::config::Config;
use newswire::feed::NewsItem;
use newswire::sources::{EnabledSources, CATALOG};

#[derive(Parser, Debug)]
#[command(
    name = "newswire",
    about = "Aggregates live headlines from syndication feeds through a CORS relay"
)]
struct Args {
    /// Config file path (TOML); a missing file falls back to defaults
    #[arg(long, value_name = "FILE", default_value = "newswire.toml")]
    config: PathBuf,

    /// Run a single aggregation cycle and exit
    #[arg(long)]
    once: bool,

    /// Comma-separated catalog ids to enable, overriding the config file
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    sources: Option<Vec<String>>,

    /// List the source catalog and exit
    #[arg(long)]
    list_sources: bool,

    /// Emit headlines as a JSON array instead of plain text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.list_sources {
        for source in CATALOG {
            println!("{:<16} {}", source.id, source.name);
        }
        return Ok(());
    }

    let config = Config::load(&args.config).context("Failed to load configuration")?;

    let enabled_ids = args
        .sources
        .unwrap_or_else(|| config.enabled_sources.clone());
    let urls = EnabledSources::from_ids(enabled_ids).resolved_urls();
    if urls.is_empty() {
        tracing::info!("No sources enabled, aggregating the default feed set");
    }

    let client = reqwest::Client::builder()
        .user_agent(concat!("newswire/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let period = Duration::from_secs(config.refresh_interval_minutes.max(1) * 60);

    // Sequential cycle loop: a cycle finishes (or times out per source)
    // before the next sleep starts, so cycles never overlap.
    loop {
        let headlines = aggregate(&client, &config, &urls).await;
        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&headlines).context("Failed to encode headlines")?
            );
        } else {
            print_headlines(&headlines);
        }

        if args.once {
            break;
        }
        tokio::time::sleep(period).await;
    }

    Ok(())
}

fn print_headlines(items: &[NewsItem]) {
    for item in items {
        println!(
            "{}  [{}] {}",
            item.published_at.format("%Y-%m-%d %H:%M"),
            item.source,
            item.title
        );
    }
}
