use super::{
    CacheConfig, ConfigError, DatabaseConfig, LoggingConfig, ProvidersConfig, RefreshConfig,
    ResolverConfig, ServerConfig,
};
use crate::category::CacheCategory;
use serde::{Deserialize, Serialize};
use std::path::Path;

const ENV_PREFIX: &str = "MEDREF_";

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub refresh: RefreshConfig,

    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Command-line values that win over file and environment
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub database_path: Option<String>,
    pub redis_url: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration: file (if any) → `MEDREF_*` environment → CLI.
    pub fn load(path: Option<&str>, cli: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        config.apply_cli(cli);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: display,
                message,
            },
            other => other,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment-style overrides through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| {
            let name = format!("{}{}", ENV_PREFIX, suffix);
            lookup(&name).map(|value| (name, value))
        };

        if let Some((_, url)) = var("REDIS_URL") {
            let url = url.trim();
            self.cache.redis_url = (!url.is_empty()).then(|| url.to_string());
        }

        if let Some((_, path)) = var("DATABASE_PATH") {
            self.database.path = path;
        }

        if let Some((_, level)) = var("LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some((name, value)) = var("STATIC_FALLBACK_SIZE") {
            self.refresh.static_fallback_size = parse_env(&name, &value)?;
        }

        for category in CacheCategory::all() {
            let suffix = format!(
                "REFRESH_{}_SECS",
                category.as_str().replace('-', "_").to_ascii_uppercase()
            );
            if let Some((name, value)) = var(&suffix) {
                self.refresh.set_override(*category, parse_env(&name, &value)?);
            }
        }

        Ok(())
    }

    pub fn apply_cli(&mut self, cli: CliOverrides) {
        if let Some(bind) = cli.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(path) = cli.database_path {
            self.database.path = path;
        }
        if let Some(url) = cli.redis_url {
            self.cache.redis_url = (!url.trim().is_empty()).then_some(url);
        }
        if let Some(level) = cli.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh.static_fallback_size == 0 {
            return Err(ConfigError::Validation(
                "refresh.static_fallback_size must be greater than zero".to_string(),
            ));
        }

        if self.refresh.max_items == 0 {
            return Err(ConfigError::Validation(
                "refresh.max_items must be greater than zero".to_string(),
            ));
        }

        if let Some((category, _)) = self.refresh.interval_overrides().find(|(_, s)| *s == 0) {
            return Err(ConfigError::Validation(format!(
                "refresh interval for '{}' must be greater than zero",
                category
            )));
        }

        if self.providers.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "providers.timeout_ms must be greater than zero".to_string(),
            ));
        }

        if self.cache.connect_timeout_ms == 0 || self.cache.recheck_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "cache timeouts must be greater than zero".to_string(),
            ));
        }

        if self.resolver.code_system_priority.is_empty() {
            return Err(ConfigError::Validation(
                "resolver.code_system_priority cannot be empty".to_string(),
            ));
        }

        if self.database.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database.path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Env {
        name: name.to_string(),
        value: value.to_string(),
    })
}
