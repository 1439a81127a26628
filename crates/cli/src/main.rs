//! # Medref
//!
//! Resilient medical reference cache: background list refresh, fallback
//! provider chains and a small status API.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use medref_application::services::ListCatalog;
use medref_domain::{CliOverrides, ListCategory};
use medref_jobs::{CacheMaintenanceJob, JobRunner, ListRefreshJob};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "medref")]
#[command(version)]
#[command(about = "Medical reference cache with background refresh and source fallback")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Status API bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Status API port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// SQLite backup database path
    #[arg(short = 'd', long)]
    database: Option<String>,

    /// Redis URL for the distributed cache (empty disables it)
    #[arg(long)]
    redis_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        port: cli.port,
        database_path: cli.database,
        redis_url: cli.redis_url,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config.logging);
    bootstrap::log_config_summary(cli.config.as_deref(), &config);

    info!("Medref starting");

    let pool = bootstrap::init_database(&config.database).await?;
    let cache = di::build_cache_store(&config).await;
    let catalog = Arc::new(ListCatalog::new(config.refresh.static_fallback_size));
    let adapters = di::Adapters::new(&config.providers, pool.clone());
    let use_cases = di::UseCases::new(&config, adapters, catalog, cache.clone());

    let seeded = use_cases.seed_catalog.execute().await;
    info!(seeded, "List catalog seeded from persistence backup");

    let shutdown = CancellationToken::new();

    let mut runner = JobRunner::new().with_cache_maintenance(
        CacheMaintenanceJob::new(cache.clone()).with_cancellation(shutdown.clone()),
    );
    for category in ListCategory::all() {
        let interval = cache.registry().refresh_interval(category.cache_category());
        runner = runner.with_list_refresh(
            ListRefreshJob::new(use_cases.refresh_list.clone(), *category, interval)
                .with_cancellation(shutdown.clone()),
        );
    }
    let handles = runner.start();

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        server::shutdown_signal().await;
        signal_token.cancel();
    });

    let served =
        server::start_web_server(&config.server, use_cases.app_state(), shutdown.clone()).await;

    info!("Shutting down background jobs");
    shutdown.cancel();
    for result in futures::future::join_all(handles).await {
        if let Err(e) = result {
            warn!(error = %e, "Background job ended abnormally");
        }
    }

    pool.close().await;
    info!("Medref stopped");

    served
}
