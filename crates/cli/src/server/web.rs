use axum::http::{HeaderValue, Method};
use axum::Router;
use medref_api::{create_api_routes, AppState};
use medref_domain::config::ServerConfig;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn create_app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state))
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods([Method::GET, Method::POST]);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

pub async fn start_web_server(
    config: &ServerConfig,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let ip: IpAddr = config.bind_address.parse()?;
    let addr = SocketAddr::new(ip, config.port);

    let listener = TcpListener::bind(addr).await?;
    info!(bind_address = %addr, "Status API listening on http://{}/api", addr);

    axum::serve(listener, create_app(state, config))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Status API stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
