use crate::category::ListCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the current list for a category came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListSource {
    PrimaryApi,
    PersistenceBackup,
    StaticFallback,
}

impl ListSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListSource::PrimaryApi => "primary-api",
            ListSource::PersistenceBackup => "persistence-backup",
            ListSource::StaticFallback => "static-fallback",
        }
    }
}

impl fmt::Display for ListSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary-api" => Ok(ListSource::PrimaryApi),
            "persistence-backup" => Ok(ListSource::PersistenceBackup),
            "static-fallback" => Ok(ListSource::StaticFallback),
            other => Err(format!("unknown list source '{}'", other)),
        }
    }
}

/// The current authoritative list for one [`ListCategory`].
///
/// Replaced wholesale on a successful refresh, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedList {
    pub id: Option<i64>,
    pub category: ListCategory,
    pub items: Vec<String>,
    pub source: ListSource,
    pub count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CachedList {
    pub fn new(category: ListCategory, items: Vec<String>, source: ListSource) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            category,
            count: items.len(),
            items,
            source,
            created_at: now,
            updated_at: now,
        }
    }

    /// Re-label a persisted row as served from the backup.
    pub fn as_backup(mut self) -> Self {
        self.source = ListSource::PersistenceBackup;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
