//! instagram-search: command-line entry point
//!
//! Reads a search input, resolves it and prints the links as JSON.

use anyhow::Result;
use clap::Parser;
use instagram_search::{config, SearchError, SearchInput, SearchResolver};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Resolve an Instagram search into direct profile, place or hashtag links.
#[derive(Parser, Debug)]
#[command(name = "instagram-search", version, about)]
struct Cli {
    /// Path to settings.yml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON input file with `search`, `searchType` and `searchLimit`
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Term to search for (overrides the input file)
    #[arg(short, long)]
    search: Option<String>,

    /// One of user, place, hashtag (overrides the input file)
    #[arg(short = 't', long)]
    search_type: Option<String>,

    /// Maximum number of links (overrides the input file)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Proxy URL used for every request
    #[arg(long)]
    proxy: Option<String>,

    /// Also write the JSON result to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn search_input(&self) -> Result<SearchInput> {
        let mut input = match self.input {
            Some(ref path) => SearchInput::from_file(path)?,
            None => SearchInput::default(),
        };

        if let Some(ref search) = self.search {
            input.search = Some(search.clone());
        }
        if let Some(ref search_type) = self.search_type {
            input.search_type = Some(search_type.clone());
        }
        if let Some(limit) = self.limit {
            input.search_limit = Some(limit);
        }

        Ok(input)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut settings, source) = config::load(cli.config.as_deref())?;
    if let Some(ref proxy) = cli.proxy {
        settings.outgoing.proxies = config::ProxySettings::all(proxy.clone());
        settings.validate()?;
    }

    let env_level = std::env::var(config::LOG_LEVEL_ENV).ok();
    let default_filter = settings.default_log_filter(env_level.as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&default_filter))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting instagram-search v{}", instagram_search::VERSION);
    match source {
        Some(ref path) => info!("Loaded settings from: {}", path.display()),
        None => info!("No settings file found, using defaults"),
    }

    let input = cli.search_input()?;
    let resolver = SearchResolver::from_settings(&settings)?;

    let urls = match resolver.resolve_input(&input).await {
        Ok(urls) => urls,
        Err(SearchError::Configuration(e)) => {
            report_invalid_input(&e);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let json = write_output(&urls, cli.output.as_deref())?;
    println!("{json}");

    Ok(())
}

/// Render `urls` as JSON, also writing them to `path` when given.
/// Nothing else is written to disk.
fn write_output(urls: &[String], path: Option<&Path>) -> Result<String> {
    let json = serde_json::to_string_pretty(urls)?;
    if let Some(path) = path {
        std::fs::write(path, &json)?;
        info!("Wrote {} links to {}", urls.len(), path.display());
    }
    Ok(json)
}

fn report_invalid_input(err: &impl std::fmt::Display) {
    info!("--  --  --  --  --");
    info!(" ");
    error!("Run failed because the provided input is incorrect:");
    error!("{}", err);
    info!(" ");
    info!("--  --  --  --  --");
}
