use crate::http::{get_json, join_url};
use async_trait::async_trait;
use medref_application::ports::TrialRegistry;
use medref_domain::config::ProvidersConfig;
use medref_domain::{ClinicalTrial, DomainError};
use serde::Deserialize;
use std::time::Duration;

const PROVIDER_ID: &str = "clinicaltrials-gov";

#[derive(Debug, Deserialize)]
struct StudiesResponse {
    #[serde(default)]
    studies: Vec<Study>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Study {
    protocol_section: Option<ProtocolSection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProtocolSection {
    identification_module: Option<IdentificationModule>,
    status_module: Option<StatusModule>,
    conditions_module: Option<ConditionsModule>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentificationModule {
    nct_id: Option<String>,
    brief_title: Option<String>,
    official_title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusModule {
    overall_status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConditionsModule {
    #[serde(default)]
    conditions: Vec<String>,
}

/// ClinicalTrials.gov API v2 study search by condition.
pub struct ClinicalTrialsGovClient {
    base_url: String,
    timeout: Duration,
}

impl ClinicalTrialsGovClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &ProvidersConfig) -> Self {
        Self::new(config.clinical_trials_url.clone(), config.timeout())
    }
}

#[async_trait]
impl TrialRegistry for ClinicalTrialsGovClient {
    fn provider_id(&self) -> &str {
        PROVIDER_ID
    }

    async fn search(
        &self,
        condition: &str,
        limit: usize,
    ) -> Result<Vec<ClinicalTrial>, DomainError> {
        let response: StudiesResponse = get_json(
            PROVIDER_ID,
            &join_url(&self.base_url, "studies"),
            &[
                ("query.cond", condition.to_string()),
                ("pageSize", limit.max(1).to_string()),
                ("format", "json".to_string()),
            ],
            self.timeout,
        )
        .await?;

        Ok(trials(response, limit))
    }
}

fn trials(response: StudiesResponse, limit: usize) -> Vec<ClinicalTrial> {
    response
        .studies
        .into_iter()
        .filter_map(|study| {
            let protocol = study.protocol_section?;
            let ident = protocol.identification_module?;
            let nct_id = ident.nct_id?;
            let title = ident
                .brief_title
                .or(ident.official_title)
                .unwrap_or_else(|| nct_id.clone());
            Some(ClinicalTrial {
                nct_id,
                title,
                status: protocol.status_module.and_then(|s| s.overall_status),
                conditions: protocol
                    .conditions_module
                    .map(|c| c.conditions)
                    .unwrap_or_default(),
            })
        })
        .take(limit)
        .collect()
}
