use crate::state::AppState;
use axum::{extract::State, Json};
use medref_domain::{DiseaseRecord, SymptomResolution};
use tracing::{debug, instrument};

#[instrument(skip(state, record), name = "api_resolve_symptoms")]
pub async fn resolve_symptoms(
    State(state): State<AppState>,
    Json(record): Json<DiseaseRecord>,
) -> Json<SymptomResolution> {
    let resolution = state.resolve_symptoms.execute(&record).await;
    debug!(
        disease = %record.id,
        source = %resolution.source_used,
        count = resolution.symptoms.len(),
        "Symptoms resolved"
    );
    Json(resolution)
}
