use medref_domain::config::LoggingConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    if config.json {
        builder.json().init();
    } else {
        builder.with_ansi(true).init();
    }

    info!(level = %config.level, json = config.json, "Logging initialized");
}
