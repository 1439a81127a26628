use super::fallback_chain::SourceFallbackChain;
use super::name_simplifier::NameSimplifier;
use crate::ports::{ConsumerHealthSource, ConsumerQuery, DataProvider, PhenotypeSource};
use async_trait::async_trait;
use medref_domain::config::ResolverConfig;
use medref_domain::{
    ChainResolution, DiseaseRecord, DomainError, ProviderResult, SymptomResolution, SymptomSource,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Resolves patient-facing symptoms for a disease.
///
/// Provider order is fixed: consumer-health text, then phenotype ontology,
/// then the static disclaimer. Consumer text is preferred for patient display
/// over clinical phenotype lists. The result is never empty.
pub struct DiseaseSymptomResolver {
    chain: SourceFallbackChain<DiseaseRecord, Vec<String>>,
}

impl DiseaseSymptomResolver {
    pub fn new(
        consumer: Arc<dyn ConsumerHealthSource>,
        phenotype: Arc<dyn PhenotypeSource>,
        config: &ResolverConfig,
        provider_timeout: Duration,
    ) -> Self {
        let providers: Vec<Arc<dyn DataProvider<DiseaseRecord, Vec<String>>>> = vec![
            Arc::new(ConsumerSourceProvider::new(consumer, config)),
            Arc::new(PhenotypeOntologyProvider::new(phenotype)),
            Arc::new(StaticDisclaimerProvider),
        ];

        Self {
            chain: SourceFallbackChain::new("disease-symptoms", providers, provider_timeout),
        }
    }

    pub fn provider_ids(&self) -> Vec<&str> {
        self.chain.provider_ids()
    }

    #[instrument(skip(self, record), fields(disease = %record.id))]
    pub async fn resolve(&self, record: &DiseaseRecord) -> SymptomResolution {
        match self.chain.resolve(record).await {
            ChainResolution::Found { value, provider_id } => {
                let source_used = SymptomSource::from_provider_id(&provider_id)
                    .unwrap_or(SymptomSource::StaticFallback);
                if value.is_empty() || source_used == SymptomSource::StaticFallback {
                    return SymptomResolution::static_fallback();
                }
                info!(source = %source_used, count = value.len(), "Symptoms resolved");
                SymptomResolution {
                    symptoms: value,
                    source_used,
                }
            }
            ChainResolution::NoneAvailable => SymptomResolution::static_fallback(),
        }
    }
}

/// Trim, drop blanks and case-insensitive duplicates, keep first-seen order.
fn clean_symptoms(raw: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
        .collect()
}

pub struct ConsumerSourceProvider {
    source: Arc<dyn ConsumerHealthSource>,
    simplifier: NameSimplifier,
    code_priority: Vec<String>,
}

impl ConsumerSourceProvider {
    pub fn new(source: Arc<dyn ConsumerHealthSource>, config: &ResolverConfig) -> Self {
        Self {
            source,
            simplifier: NameSimplifier::new(config.qualifier_tokens.clone()),
            code_priority: config.code_system_priority.clone(),
        }
    }

    /// Queries in preference order: clinical code (if the record has one),
    /// then the simplified display name.
    pub fn queries_for(&self, record: &DiseaseRecord) -> Vec<ConsumerQuery> {
        let mut queries = Vec::with_capacity(2);
        if let Some((system, code)) = record.cross_reference(&self.code_priority) {
            queries.push(ConsumerQuery::Code { system, code });
        }
        let term = self.simplifier.simplify(&record.name);
        if !term.is_empty() {
            queries.push(ConsumerQuery::Term(term));
        }
        queries
    }
}

#[async_trait]
impl DataProvider<DiseaseRecord, Vec<String>> for ConsumerSourceProvider {
    fn provider_id(&self) -> &str {
        SymptomSource::ConsumerSource.as_str()
    }

    /// A failed query moves on to the next one; the error is returned only
    /// when every query failed.
    async fn query(
        &self,
        record: &DiseaseRecord,
    ) -> Result<ProviderResult<Vec<String>>, DomainError> {
        let mut last_error = None;
        let mut answered = false;

        for query in self.queries_for(record) {
            match self.source.symptoms_for(&query).await {
                Ok(raw) => {
                    answered = true;
                    let symptoms = clean_symptoms(raw);
                    if !symptoms.is_empty() {
                        return Ok(ProviderResult::found(self.provider_id(), symptoms));
                    }
                    debug!(?query, "Consumer source returned no symptoms");
                }
                Err(e) => {
                    warn!(?query, error = %e, "Consumer source query failed");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if !answered => Err(e),
            _ => Ok(ProviderResult::absent(self.provider_id())),
        }
    }
}

pub struct PhenotypeOntologyProvider {
    source: Arc<dyn PhenotypeSource>,
}

impl PhenotypeOntologyProvider {
    pub fn new(source: Arc<dyn PhenotypeSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl DataProvider<DiseaseRecord, Vec<String>> for PhenotypeOntologyProvider {
    fn provider_id(&self) -> &str {
        SymptomSource::PhenotypeOntology.as_str()
    }

    async fn query(
        &self,
        record: &DiseaseRecord,
    ) -> Result<ProviderResult<Vec<String>>, DomainError> {
        if record.id.trim().is_empty() {
            return Ok(ProviderResult::absent(self.provider_id()));
        }
        let phenotypes = clean_symptoms(self.source.phenotypes_for(record.id.trim()).await?);
        if phenotypes.is_empty() {
            Ok(ProviderResult::absent(self.provider_id()))
        } else {
            Ok(ProviderResult::found(self.provider_id(), phenotypes))
        }
    }
}

/// Terminal link: always answers with the fixed disclaimer.
pub struct StaticDisclaimerProvider;

#[async_trait]
impl DataProvider<DiseaseRecord, Vec<String>> for StaticDisclaimerProvider {
    fn provider_id(&self) -> &str {
        SymptomSource::StaticFallback.as_str()
    }

    async fn query(
        &self,
        _record: &DiseaseRecord,
    ) -> Result<ProviderResult<Vec<String>>, DomainError> {
        Ok(ProviderResult::found(
            self.provider_id(),
            SymptomResolution::static_fallback().symptoms,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_symptoms_dedupes_case_insensitively() {
        let cleaned = clean_symptoms(vec![
            " Polyuria ".into(),
            "polyuria".into(),
            "".into(),
            "Polydipsia".into(),
        ]);
        assert_eq!(cleaned, vec!["Polyuria".to_string(), "Polydipsia".to_string()]);
    }
}
