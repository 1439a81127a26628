use async_trait::async_trait;
use chrono::{DateTime, Utc};
use medref_application::ports::ListBackupRepository;
use medref_domain::{CachedList, DomainError, ListCategory, ListSource};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument, warn};

type ListRow = (i64, String, i64, String, String, String);

/// Persistence backup on SQLite: one table per list category, newest row wins.
pub struct SqliteListBackupRepository {
    pool: SqlitePool,
}

impl SqliteListBackupRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_list(category: ListCategory, row: ListRow) -> Result<CachedList, DomainError> {
        let (id, items_json, count, source, created_at, updated_at) = row;

        let items: Vec<String> = serde_json::from_str(&items_json).map_err(|e| {
            DomainError::Serialization(format!("{} row {}: {}", category.table_name(), id, e))
        })?;
        if items.len() as i64 != count {
            warn!(
                table = category.table_name(),
                id,
                stored = count,
                actual = items.len(),
                "Backup row count mismatch"
            );
        }

        Ok(CachedList {
            id: Some(id),
            category,
            count: items.len(),
            items,
            source: source.parse().unwrap_or(ListSource::PrimaryApi),
            created_at: parse_timestamp(&created_at),
            updated_at: parse_timestamp(&updated_at),
        })
    }
}

fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

#[async_trait]
impl ListBackupRepository for SqliteListBackupRepository {
    #[instrument(skip(self))]
    async fn load_latest(&self, category: ListCategory) -> Result<Option<CachedList>, DomainError> {
        let sql = format!(
            "SELECT id, {}, count, source, created_at, updated_at
             FROM {} ORDER BY id DESC LIMIT 1",
            category.items_column(),
            category.table_name()
        );

        let row = sqlx::query_as::<_, ListRow>(&sql)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, table = category.table_name(), "Failed to load backup list");
                DomainError::DatabaseError(e.to_string())
            })?;

        row.map(|row| Self::row_to_list(category, row)).transpose()
    }

    #[instrument(skip(self, items), fields(count = items.len()))]
    async fn replace(
        &self,
        category: ListCategory,
        items: &[String],
        source: ListSource,
    ) -> Result<CachedList, DomainError> {
        let items_json = serde_json::to_string(items)
            .map_err(|e| DomainError::Serialization(e.to_string()))?;
        let list = CachedList::new(category, items.to_vec(), source);
        let created_at = list.created_at.to_rfc3339();
        let updated_at = list.updated_at.to_rfc3339();

        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin backup transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        let insert = format!(
            "INSERT INTO {} ({}, count, source, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
            category.table_name(),
            category.items_column()
        );
        let result = sqlx::query(&insert)
            .bind(&items_json)
            .bind(items.len() as i64)
            .bind(source.as_str())
            .bind(&created_at)
            .bind(&updated_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(error = %e, table = category.table_name(), "Failed to insert backup list");
                DomainError::DatabaseError(e.to_string())
            })?;
        let id = result.last_insert_rowid();

        let prune = format!("DELETE FROM {} WHERE id <> ?", category.table_name());
        let pruned = sqlx::query(&prune)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(
                    error = %e,
                    table = category.table_name(),
                    "Failed to prune old backup rows"
                );
                DomainError::DatabaseError(e.to_string())
            })?;

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit backup transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!(
            table = category.table_name(),
            id,
            pruned = pruned.rows_affected(),
            "Backup list replaced"
        );

        Ok(CachedList {
            id: Some(id),
            ..list
        })
    }
}
