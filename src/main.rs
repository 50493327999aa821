//! Pokedex - An interactive PokeAPI explorer
//!
//! Startup wires one expiring cache into the HTTP fetcher and hands the
//! resulting API client to a REPL session reading from stdin.

use tokio::io::BufReader;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Cache, CachedFetcher, Config, HttpFetcher, PokeApi, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, so stdout stays the REPL)
/// 2. Load configuration from environment variables
/// 3. Create the cache, which starts its background sweep
/// 4. Wrap the HTTP fetcher with the cache and build the API client
/// 5. Run the REPL until `exit`, EOF or Ctrl+C
/// 6. Stop the sweep
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn", can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={:?}, api_base_url={}, page_size={}",
        config.cache_interval(),
        config.api_base_url,
        config.page_size
    );

    let cache = Cache::new(config.cache_interval());
    let fetcher = CachedFetcher::new(cache.clone(), HttpFetcher::new(config.http_timeout())?);
    let mut session = Session::new(PokeApi::from_config(fetcher, &config));

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    let interrupted = tokio::select! {
        result = repl::run(&mut session, stdin, &mut stdout) => {
            result?;
            false
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, exiting");
            println!();
            true
        }
    };

    cache.stop().await;
    let stats = cache.stats();
    info!(
        "Cache stats: hits={}, misses={}, reclaimed={}, hit_rate={:.2}",
        stats.hits,
        stats.misses,
        stats.reclaimed,
        stats.hit_rate()
    );

    if interrupted {
        // The pending stdin read sits on a blocking thread the runtime would wait for
        std::process::exit(130);
    }
    Ok(())
}
