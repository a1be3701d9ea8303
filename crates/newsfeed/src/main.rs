//! newsfeed - newest Hacker News stories, cached and served over HTTP

mod cli;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use newsfeed_core::views::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use newsfeed_core::{NewsStore, NewsStoreConfig, PageRequest};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "newsfeed=info,newsfeed_core=info,newsfeed_web=info";

#[derive(Parser)]
#[command(
    name = "newsfeed",
    version,
    about = "Newest Hacker News stories, cached and served over HTTP",
    long_about = "Fetches the newest Hacker News stories, keeps them in a short-lived\n\
                  in-memory cache, and serves paginated and search views.\n\
                  \n\
                  Examples:\n\
                    newsfeed                          # Serve the API on 127.0.0.1:5000\n\
                    newsfeed serve --port 8080        # Custom port\n\
                    newsfeed latest --page 2          # Print the second page of stories\n\
                    newsfeed search rust --json       # Search titles, print JSON\n\
                  \n\
                  Endpoints:\n\
                    GET  /api/newsfeed/latestnews?page=1&pageSize=20\n\
                    GET  /api/newsfeed/search?query=rust\n\
                    POST /api/newsfeed/refresh\n\
                    GET  /api/health\n\
                  \n\
                  Logging is controlled with RUST_LOG (default: info)."
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    #[command(flatten)]
    upstream: UpstreamArgs,

    /// Address to bind when serving
    #[arg(long, global = true, env = "NEWSFEED_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port for web server
    #[arg(long, global = true, env = "NEWSFEED_PORT", default_value = "5000")]
    port: u16,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "NEWSFEED_NO_COLOR")]
    no_color: bool,
}

#[derive(Args)]
struct UpstreamArgs {
    /// Hacker News API base URL
    #[arg(long, global = true, env = "NEWSFEED_UPSTREAM_URL", default_value = newsfeed_core::hn::HN_API_URL)]
    upstream_url: String,

    /// Number of newest stories to fetch
    #[arg(long, global = true, env = "NEWSFEED_STORY_LIMIT", default_value = "100")]
    story_limit: usize,

    /// Cache freshness window in seconds
    #[arg(long, global = true, env = "NEWSFEED_CACHE_TTL_SECS", default_value = "180")]
    cache_ttl_secs: u64,

    /// Maximum concurrent item requests per fetch
    #[arg(long, global = true, env = "NEWSFEED_MAX_CONCURRENT", default_value = "100")]
    max_concurrent: usize,

    /// Upstream request timeout in seconds
    #[arg(long, global = true, env = "NEWSFEED_TIMEOUT_SECS", default_value = "10")]
    timeout_secs: u64,
}

impl UpstreamArgs {
    fn to_config(&self) -> NewsStoreConfig {
        NewsStoreConfig {
            base_url: self.upstream_url.clone(),
            story_limit: self.story_limit,
            cache_ttl: Duration::from_secs(self.cache_ttl_secs),
            max_concurrent_requests: self.max_concurrent,
            request_timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the HTTP API (default)
    Serve,
    /// Print one page of the newest stories and exit
    Latest {
        /// Page number (1-based)
        #[arg(long, short = 'p', default_value_t = DEFAULT_PAGE, allow_negative_numbers = true)]
        page: i64,
        /// Stories per page
        #[arg(long, short = 's', default_value_t = DEFAULT_PAGE_SIZE, allow_negative_numbers = true)]
        page_size: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search newest story titles and exit
    Search {
        /// Case-insensitive title substring
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.no_color);

    let config = cli.upstream.to_config();
    let no_color = cli.no_color;

    match cli.mode.unwrap_or(Mode::Serve) {
        Mode::Serve => {
            run_serve(config, SocketAddr::new(cli.host, cli.port)).await?;
        }
        Mode::Latest {
            page,
            page_size,
            json,
        } => {
            run_latest(config, page, page_size, json, no_color).await?;
        }
        Mode::Search { query, json } => {
            run_search(config, &query, json, no_color).await?;
        }
    }

    Ok(())
}

fn init_tracing(no_color: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_serve(config: NewsStoreConfig, addr: SocketAddr) -> Result<()> {
    tracing::info!(
        upstream = %config.base_url,
        story_limit = config.story_limit,
        ttl_secs = config.cache_ttl.as_secs(),
        "Starting newsfeed server"
    );

    let store = Arc::new(NewsStore::new(config).context("Failed to create news store")?);
    newsfeed_web::run(store, addr).await
}

async fn run_latest(
    config: NewsStoreConfig,
    page: i64,
    page_size: i64,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let request = PageRequest::new(page, page_size)?;
    let store = NewsStore::new(config).context("Failed to create news store")?;

    let stories = store
        .latest(request)
        .await
        .context("Failed to load newest stories")?;

    println!(
        "{}",
        cli::format_story_table(&stories, request.offset().saturating_add(1), json, no_color)
    );
    Ok(())
}

async fn run_search(config: NewsStoreConfig, query: &str, json: bool, no_color: bool) -> Result<()> {
    let store = NewsStore::new(config).context("Failed to create news store")?;

    let stories = store
        .search(query)
        .await
        .with_context(|| format!("Failed to search stories for '{query}'"))?;

    println!("{}", cli::format_story_table(&stories, 1, json, no_color));
    Ok(())
}
