use crate::ports::ListBackupRepository;
use crate::services::ListCatalog;
use medref_domain::{ListCategory, ListSource};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case: load the last persisted list of every category into the
/// catalog at startup, before the first refresh completes.
///
/// Categories with no usable backup stay on their static list.
pub struct SeedListCatalogUseCase {
    backup: Arc<dyn ListBackupRepository>,
    catalog: Arc<ListCatalog>,
}

impl SeedListCatalogUseCase {
    pub fn new(backup: Arc<dyn ListBackupRepository>, catalog: Arc<ListCatalog>) -> Self {
        Self { backup, catalog }
    }

    /// Returns how many categories were seeded from the backup.
    pub async fn execute(&self) -> usize {
        let mut seeded = 0;

        for category in ListCategory::all() {
            match self.backup.load_latest(*category).await {
                Ok(Some(list)) if !list.is_empty() => {
                    let count = list.count;
                    if self
                        .catalog
                        .install_if(list.as_backup(), |c| c.source == ListSource::StaticFallback)
                    {
                        seeded += 1;
                        info!(category = %category, count, "Seeded list from persistence backup");
                    }
                }
                Ok(_) => {
                    info!(category = %category, "No backup available, serving static list");
                }
                Err(e) => {
                    warn!(
                        category = %category,
                        error = %e,
                        "Failed to read backup, serving static list"
                    );
                }
            }
        }

        seeded
    }
}
