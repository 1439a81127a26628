use super::parse_category;
use crate::dto::{CategoryStatusResponse, StatusResponse};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_status")]
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let categories: Vec<CategoryStatusResponse> = state
        .get_status
        .execute_all()
        .into_iter()
        .map(CategoryStatusResponse::from)
        .collect();
    let cache = state.get_status.cache_stats().into();

    debug!(
        categories = categories.len(),
        degraded = categories.iter().filter(|c| c.degraded).count(),
        "Refresh status collected"
    );

    Json(StatusResponse { categories, cache })
}

#[instrument(skip(state), name = "api_get_category_status")]
pub async fn get_category_status(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<CategoryStatusResponse>, (StatusCode, String)> {
    let category = parse_category(&category)?;
    Ok(Json(state.get_status.execute(category).into()))
}
