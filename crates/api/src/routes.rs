use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/status", get(handlers::get_status))
        .route("/status/{category}", get(handlers::get_category_status))
        .route("/lists/{category}", get(handlers::get_list))
        .route("/lists/{category}/refresh", post(handlers::refresh_list))
        .route("/symptoms", post(handlers::resolve_symptoms))
        .route("/literature", get(handlers::search_literature))
        .route("/trials", get(handlers::search_trials))
        .with_state(state)
}
