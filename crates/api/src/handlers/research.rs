use crate::dto::{LiteratureParams, TrialsParams};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use medref_domain::{ClinicalTrial, LiteratureArticle, QueryAnswer};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_search_literature")]
pub async fn search_literature(
    State(state): State<AppState>,
    Query(params): Query<LiteratureParams>,
) -> Json<QueryAnswer<LiteratureArticle>> {
    let answer = state.search_literature.execute(&params.q).await;
    debug!(
        count = answer.items.len(),
        freshness = ?answer.freshness,
        "Literature search answered"
    );
    Json(answer)
}

#[instrument(skip(state), name = "api_search_trials")]
pub async fn search_trials(
    State(state): State<AppState>,
    Query(params): Query<TrialsParams>,
) -> Json<QueryAnswer<ClinicalTrial>> {
    let answer = state.search_trials.execute(&params.condition).await;
    debug!(
        count = answer.items.len(),
        freshness = ?answer.freshness,
        "Trial search answered"
    );
    Json(answer)
}
