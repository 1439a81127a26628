pub mod memory_backend;
pub mod redis_backend;

pub use memory_backend::InMemoryCacheBackend;
pub use redis_backend::RedisCacheBackend;

use medref_application::ports::CacheBackend;
use medref_domain::config::CacheConfig;
use std::sync::Arc;
use tracing::{info, warn};

/// Connect the distributed backend named in `config`, if any.
///
/// `None` means the store runs on the in-process map alone: either no URL
/// is configured or the backend could not be reached within
/// `connect_timeout` at startup.
pub async fn select_cache_backend(config: &CacheConfig) -> Option<Arc<dyn CacheBackend>> {
    let url = config.redis_url.as_deref().filter(|u| !u.trim().is_empty())?;

    let connect = async {
        let backend = RedisCacheBackend::connect(url).await?;
        backend.ping().await?;
        Ok::<_, medref_domain::DomainError>(backend)
    };

    match tokio::time::timeout(config.connect_timeout(), connect).await {
        Ok(Ok(backend)) => {
            info!(url = %redis_backend::redact_url(url), "Using Redis cache backend");
            Some(Arc::new(backend))
        }
        Ok(Err(e)) => {
            warn!(
                url = %redis_backend::redact_url(url),
                error = %e,
                "Redis unreachable at startup, using in-process cache"
            );
            None
        }
        Err(_) => {
            warn!(
                url = %redis_backend::redact_url(url),
                timeout_ms = config.connect_timeout().as_millis() as u64,
                "Redis connect timed out, using in-process cache"
            );
            None
        }
    }
}
