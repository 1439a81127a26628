use medref_domain::DomainError;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Shared HTTP client with connection pooling across all provider adapters.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(4)
        .user_agent(concat!("medref/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

pub fn client() -> &'static reqwest::Client {
    &SHARED_CLIENT
}

/// GET `url` with `query` parameters and return the body as text.
///
/// Transport errors and HTTP >= 400 map to `ProviderUnavailable`, an elapsed
/// `timeout` to `ProviderTimeout`.
pub async fn get_text(
    provider: &str,
    url: &str,
    query: &[(&str, String)],
    timeout: Duration,
) -> Result<String, DomainError> {
    debug!(provider, url, "Provider request");

    let response = tokio::time::timeout(timeout, client().get(url).query(query).send())
        .await
        .map_err(|_| {
            DomainError::ProviderTimeout(format!(
                "{} did not answer within {}ms",
                provider,
                timeout.as_millis()
            ))
        })?
        .map_err(|e| {
            DomainError::ProviderUnavailable(format!("{} request failed: {}", provider, e))
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DomainError::ProviderUnavailable(format!(
            "{} returned HTTP {}: {}",
            provider,
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )));
    }

    tokio::time::timeout(timeout, response.text())
        .await
        .map_err(|_| {
            DomainError::ProviderTimeout(format!("Timeout reading {} response", provider))
        })?
        .map_err(|e| {
            DomainError::ProviderUnavailable(format!("Failed to read {} response: {}", provider, e))
        })
}

/// [`get_text`] followed by a typed JSON decode; decode failures are
/// `MalformedResponse`.
pub async fn get_json<T: DeserializeOwned>(
    provider: &str,
    url: &str,
    query: &[(&str, String)],
    timeout: Duration,
) -> Result<T, DomainError> {
    let body = get_text(provider, url, query, timeout).await?;
    parse_json(provider, &body)
}

pub fn parse_json<T: DeserializeOwned>(provider: &str, body: &str) -> Result<T, DomainError> {
    serde_json::from_str(body).map_err(|e| {
        DomainError::MalformedResponse(format!("{} response did not decode: {}", provider, e))
    })
}

/// Join a base URL and a path without doubling or dropping the slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
