use async_trait::async_trait;
use medref_application::ports::CacheBackend;
use medref_domain::DomainError;
use std::time::Duration;
use tracing::debug;

/// Redis-backed cache using `ConnectionManager`, which multiplexes one
/// connection and reconnects on its own after a drop.
#[derive(Clone)]
pub struct RedisCacheBackend {
    connection_manager: redis::aio::ConnectionManager,
}

impl std::fmt::Debug for RedisCacheBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheBackend")
            .field("connection_manager", &"ConnectionManager")
            .finish()
    }
}

impl RedisCacheBackend {
    pub async fn connect(url: &str) -> Result<Self, DomainError> {
        let client = redis::Client::open(url).map_err(|e| {
            DomainError::CacheBackend(format!("Invalid Redis URL {}: {}", redact_url(url), e))
        })?;

        let connection_manager = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(|e| DomainError::CacheBackend(format!("Failed to connect to Redis: {}", e)))?;

        debug!(url = %redact_url(url), "Redis cache backend connected");

        Ok(Self { connection_manager })
    }
}

#[async_trait]
impl CacheBackend for RedisCacheBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        let mut conn = self.connection_manager.clone();
        redis::cmd("GET")
            .arg(key)
            .query_async::<Option<Vec<u8>>>(&mut conn)
            .await
            .map_err(|e| DomainError::CacheBackend(format!("Redis GET failed: {}", e)))
    }

    async fn set(&self, key: &str, value: Vec<u8>, retain: Duration) -> Result<(), DomainError> {
        let mut conn = self.connection_manager.clone();
        let retain_secs = retain.as_secs().max(1);

        redis::cmd("SETEX")
            .arg(key)
            .arg(retain_secs)
            .arg(value)
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| DomainError::CacheBackend(format!("Redis SETEX failed: {}", e)))
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        let mut conn = self.connection_manager.clone();
        redis::cmd("DEL")
            .arg(key)
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| DomainError::CacheBackend(format!("Redis DEL failed: {}", e)))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        let mut conn = self.connection_manager.clone();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| DomainError::CacheBackend(format!("Redis PING failed: {}", e)))?;

        if pong == "PONG" {
            Ok(())
        } else {
            Err(DomainError::CacheBackend(format!("Unexpected PING reply: {}", pong)))
        }
    }

    fn name(&self) -> &'static str {
        "redis"
    }

    fn is_distributed(&self) -> bool {
        true
    }
}

/// Hide the password in a Redis URL before it reaches the logs.
pub fn redact_url(url: &str) -> String {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let rest = &url[scheme_end..];
    if let Some(at_pos) = rest.find('@') {
        if let Some(colon_pos) = rest[..at_pos].find(':') {
            return format!(
                "{}{}***{}",
                &url[..scheme_end],
                &rest[..=colon_pos],
                &rest[at_pos..]
            );
        }
    }
    url.to_string()
}
