use crate::config::Config;
use crate::core::SearchResultItem;
use crate::utils::{read_search_response, read_serialized, write_serialized};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "yt-search-records")]
#[command(about = "Parse a YouTube search response into typed records and verify the JSON round-trip")]
#[command(version)]
pub struct Cli {
    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Raw search.list response to read
    #[arg(short, long, value_name = "FILE")]
    pub response: Option<PathBuf>,

    /// Serialized records to write and re-read
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Config file values with command-line flags applied on top.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(response) = &self.response {
            config.response_path = response.clone();
        }
        if let Some(output) = &self.output {
            config.serialized_path = output.clone();
        }
        if self.compact {
            config.pretty = false;
        }

        Ok(config)
    }

    pub async fn run(&self) -> Result<()> {
        let config = self.resolve_config()?;
        let rebuilt = round_trip(&config).await?;

        match rebuilt.first() {
            Some(first) => println!("{:#?}", first),
            None => println!("Search response contained no items"),
        }

        Ok(())
    }
}

/// Parses the configured response, writes the serialized records, reads
/// them back and checks nothing changed on the way.
pub async fn round_trip(config: &Config) -> Result<Vec<SearchResultItem>> {
    info!("Reading search response from {}", config.response_path.display());
    let items = read_search_response(&config.response_path).await?;

    if items.is_empty() {
        warn!("Search response {} has no items", config.response_path.display());
    }

    write_serialized(&config.serialized_path, &items, config.pretty).await?;
    info!(
        "Serialized {} results to {}",
        items.len(),
        config.serialized_path.display()
    );

    let rebuilt = read_serialized(&config.serialized_path).await?;
    anyhow::ensure!(
        rebuilt == items,
        "Records read back from {} differ from the parsed response",
        config.serialized_path.display()
    );

    Ok(rebuilt)
}
