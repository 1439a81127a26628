use super::parse_category;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use medref_domain::{CachedList, RefreshOutcome};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[instrument(skip(state), name = "api_get_list")]
pub async fn get_list(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Arc<CachedList>>, (StatusCode, String)> {
    let category = parse_category(&category)?;
    let list = state.get_list.execute(category).await;

    debug!(
        category = %category,
        source = %list.source,
        count = list.count,
        "Serving current list"
    );

    Ok(Json(list))
}

/// Runs a refresh inline. A refresh already in flight answers `coalesced`.
#[instrument(skip(state), name = "api_refresh_list")]
pub async fn refresh_list(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<RefreshOutcome>, (StatusCode, String)> {
    let category = parse_category(&category)?;
    info!(category = %category, "Manual list refresh requested");

    let outcome = state.refresh_list.execute(category).await;
    if let RefreshOutcome::Failed { error } = &outcome {
        warn!(category = %category, error = %error, "Manual list refresh failed");
    }

    Ok(Json(outcome))
}
