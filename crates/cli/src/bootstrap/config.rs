use medref_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged after the subscriber is up; loading happens before logging exists.
pub fn log_config_summary(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        bind = %config.server.bind_address,
        port = config.server.port,
        database = %config.database.path,
        redis = config.cache.redis_url.is_some(),
        static_fallback_size = config.refresh.static_fallback_size,
        "Configuration loaded"
    );
}
