//! redis_basic - demo entry point
//!
//! Runs the instrumented cache or the page cache against the configured store.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use redis_basic::cache::{Cache, Data, STORE_METHOD};
use redis_basic::instrument::print_replay;
use redis_basic::store::Store;
use redis_basic::web::{count_key, HttpFetcher, PageCache};
use redis_basic::Config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Call counting, call history and page caching on top of a key-value store
struct Cli {
    #[arg(long, value_name = "URL")]
    /// store backend: `memory` or a redis:// URL (overrides STORE_URL)
    store: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Store values through the instrumented cache, then replay the calls
    Exercise {
        /// values to store; integers and decimals are stored as numbers
        values: Vec<String>,

        #[arg(long)]
        /// print the replay as JSON
        json: bool,
    },
    /// Fetch a page through the page cache and print its access count
    Web {
        /// page to fetch (defaults to PAGE_URL)
        url: Option<String>,

        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        /// number of times to request the page
        repeat: u32,

        #[arg(long, value_name = "SECONDS")]
        /// cache expiration (overrides PAGE_TTL)
        ttl: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redis_basic=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(store_url) = cli.store {
        config.store_url = store_url;
    }
    info!(
        "Configuration loaded: store={}, page_ttl={}s, page_url={}",
        config.store_url, config.page_ttl, config.page_url
    );

    let store = config
        .open_store()
        .with_context(|| format!("opening store '{}'", config.store_url))?;

    match cli.command {
        Command::Exercise { values, json } => run_exercise(store, values, json),
        Command::Web { url, repeat, ttl } => {
            let url = url.unwrap_or_else(|| config.page_url.clone());
            run_web(store, &url, repeat, ttl.unwrap_or(config.page_ttl))
        }
    }
}

/// Interprets a command-line value the way a caller would pass it in code.
fn parse_data(value: &str) -> Data {
    if let Ok(n) = value.parse::<i64>() {
        Data::Int(n)
    } else if let Ok(x) = value.parse::<f64>() {
        Data::Float(x)
    } else {
        Data::Str(value.to_string())
    }
}

fn run_exercise(store: Box<dyn Store>, values: Vec<String>, json: bool) -> anyhow::Result<()> {
    let values = if values.is_empty() {
        vec!["foo".to_string(), "bar".to_string(), "42".to_string()]
    } else {
        values
    };

    let mut cache = Cache::new(store)?;
    for value in &values {
        let key = cache.store(parse_data(value))?;
        let stored = cache.get_raw(&key)?.unwrap_or_default();
        println!("{} -> {}", key, String::from_utf8_lossy(&stored));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&cache.replay()?)?);
    } else {
        print_replay(cache.store_handle(), STORE_METHOD)?;
    }
    Ok(())
}

fn run_web(store: Box<dyn Store>, url: &str, repeat: u32, ttl: u64) -> anyhow::Result<()> {
    let mut pages = PageCache::new(store, HttpFetcher::new()?).with_ttl(ttl)?;

    let fetch_context = || format!("fetching {}", url);
    let mut body = pages.get_page(url).with_context(fetch_context)?;
    for _ in 1..repeat {
        body = pages.get_page(url).with_context(fetch_context)?;
    }

    println!("{}", body);
    println!("{} = {}", count_key(url), pages.access_count(url)?);
    Ok(())
}
