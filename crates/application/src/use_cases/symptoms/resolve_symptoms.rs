use crate::services::{CacheStore, DiseaseSymptomResolver};
use medref_domain::{CacheCategory, DiseaseRecord, SymptomResolution, SymptomSource};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Use case: symptoms for a disease, cache-first.
///
/// Only live-source answers are cached; the static disclaimer is not, so a
/// provider that comes back is used on the next request.
pub struct ResolveSymptomsUseCase {
    resolver: Arc<DiseaseSymptomResolver>,
    cache: Arc<CacheStore>,
}

impl ResolveSymptomsUseCase {
    pub fn new(resolver: Arc<DiseaseSymptomResolver>, cache: Arc<CacheStore>) -> Self {
        Self { resolver, cache }
    }

    pub fn cache_key(record: &DiseaseRecord) -> String {
        let id = record.id.trim();
        if id.is_empty() {
            format!("symptoms:name:{}", record.name.trim().to_lowercase())
        } else {
            format!("symptoms:{}", id)
        }
    }

    #[instrument(skip(self, record), fields(disease = %record.id))]
    pub async fn execute(&self, record: &DiseaseRecord) -> SymptomResolution {
        let key = Self::cache_key(record);

        if let Some(cached) = self
            .cache
            .get_json::<SymptomResolution>(&key, CacheCategory::MedicalReference)
            .await
        {
            if !cached.symptoms.is_empty() {
                debug!(source = %cached.source_used, "Symptoms served from cache");
                return cached;
            }
        }

        let resolution = self.resolver.resolve(record).await;
        if resolution.source_used != SymptomSource::StaticFallback {
            self.cache
                .set_json(&key, &resolution, CacheCategory::MedicalReference)
                .await;
        }
        resolution
    }
}
