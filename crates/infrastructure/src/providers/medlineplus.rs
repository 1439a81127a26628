use crate::http::get_json;
use async_trait::async_trait;
use fancy_regex::Regex;
use medref_application::ports::{ConsumerHealthSource, ConsumerQuery};
use medref_domain::config::ProvidersConfig;
use medref_domain::DomainError;
use serde::Deserialize;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

const PROVIDER_ID: &str = "medlineplus-connect";
const ICD10CM_OID: &str = "2.16.840.1.113883.6.90";
const SNOMEDCT_OID: &str = "2.16.840.1.113883.6.96";
const ICD9CM_OID: &str = "2.16.840.1.113883.6.103";
/// Longer `<li>` items are prose, not symptom names.
const MAX_SYMPTOM_LEN: usize = 120;

static LIST_ITEM: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?is)<li[^>]*>(.*?)</li>").ok());
static TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").ok());

#[derive(Debug, Deserialize)]
struct ConnectResponse {
    feed: Option<Feed>,
}

#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(default)]
    entry: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    summary: Option<TextValue>,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    #[serde(rename = "_value", default)]
    value: String,
}

/// Patient-facing health topics from MedlinePlus Connect.
pub struct MedlinePlusConnectClient {
    base_url: String,
    timeout: Duration,
}

impl MedlinePlusConnectClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &ProvidersConfig) -> Self {
        Self::new(config.consumer_health_url.clone(), config.timeout())
    }
}

/// Query parameters for a code or display-name lookup.
fn query_params(query: &ConsumerQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![("knowledgeResponseType", "application/json".to_string())];
    match query {
        ConsumerQuery::Code { system, code } => {
            params.push(("mainSearchCriteria.v.cs", code_system_oid(system).to_string()));
            params.push(("mainSearchCriteria.v.c", code.clone()));
        }
        ConsumerQuery::Term(term) => {
            params.push(("mainSearchCriteria.v.cs", ICD10CM_OID.to_string()));
            params.push(("mainSearchCriteria.v.dn", term.clone()));
        }
    }
    params
}

fn code_system_oid(system: &str) -> &'static str {
    match system.to_ascii_uppercase().as_str() {
        "SNOMEDCT_US" | "SNOMEDCT" | "SCTID" => SNOMEDCT_OID,
        "ICD9CM" | "ICD9" => ICD9CM_OID,
        _ => ICD10CM_OID,
    }
}

#[async_trait]
impl ConsumerHealthSource for MedlinePlusConnectClient {
    async fn symptoms_for(&self, query: &ConsumerQuery) -> Result<Vec<String>, DomainError> {
        let params = query_params(query);
        let response: ConnectResponse =
            get_json(PROVIDER_ID, &self.base_url, &params, self.timeout).await?;

        let symptoms = symptoms_from_response(response);
        debug!(?query, count = symptoms.len(), "MedlinePlus Connect answered");
        Ok(symptoms)
    }
}

fn symptoms_from_response(response: ConnectResponse) -> Vec<String> {
    response
        .feed
        .map(|feed| feed.entry)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|entry| entry.summary)
        .flat_map(|summary| list_items(&summary.value))
        .collect()
}

/// Text of every `<li>` in an HTML fragment, tags stripped and common
/// entities decoded.
pub fn list_items(html: &str) -> Vec<String> {
    let (Some(item_re), Some(tag_re)) = (LIST_ITEM.as_ref(), TAG.as_ref()) else {
        return Vec::new();
    };

    item_re
        .captures_iter(html)
        .filter_map(|caps| caps.ok())
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .map(|inner| tag_re.replace_all(&inner, "").into_owned())
        .map(|text| decode_entities(&text))
        .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|text| !text.is_empty() && text.len() <= MAX_SYMPTOM_LEN)
        .collect()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::parse_json;

    #[test]
    fn test_list_items_strip_tags_and_entities() {
        let html = "<p>Symptoms include:</p><ul><li>Increased <b>thirst</b></li>\
                    <LI class=\"x\">Frequent&nbsp;urination</LI>\
                    <li>Fatigue &amp; weakness</li><li> </li></ul>";
        assert_eq!(
            list_items(html),
            vec![
                "Increased thirst".to_string(),
                "Frequent urination".to_string(),
                "Fatigue & weakness".to_string(),
            ]
        );
    }

    #[test]
    fn test_long_items_are_dropped() {
        let long = "word ".repeat(40);
        assert!(list_items(&format!("<li>{}</li>", long)).is_empty());
    }

    #[test]
    fn test_parses_feed_summaries() {
        let body = r#"{"feed": {"entry": [
            {"title": {"_value": "Diabetes"},
             "summary": {"_value": "<ul><li>Polyuria</li><li>Polydipsia</li></ul>"}},
            {"title": {"_value": "No summary"}}
        ]}}"#;
        let response: ConnectResponse = parse_json(PROVIDER_ID, body).unwrap();
        assert_eq!(
            symptoms_from_response(response),
            vec!["Polyuria".to_string(), "Polydipsia".to_string()]
        );
    }

    #[test]
    fn test_empty_feed() {
        let response: ConnectResponse = parse_json(PROVIDER_ID, r#"{"feed": {}}"#).unwrap();
        assert!(symptoms_from_response(response).is_empty());
    }

    #[test]
    fn test_query_params_by_code_and_term() {
        let code = query_params(&ConsumerQuery::Code {
            system: "SNOMEDCT_US".into(),
            code: "44054006".into(),
        });
        assert!(code.contains(&("mainSearchCriteria.v.cs", SNOMEDCT_OID.to_string())));
        assert!(code.contains(&("mainSearchCriteria.v.c", "44054006".to_string())));

        let term = query_params(&ConsumerQuery::Term("diabetes mellitus".into()));
        assert!(term.contains(&("mainSearchCriteria.v.dn", "diabetes mellitus".to_string())));
    }
}
