use medref_application::services::{CacheStore, ListCatalog};
use medref_application::use_cases::RefreshListUseCase;
use medref_domain::{CacheStrategyRegistry, ListCategory, ListSource};
use medref_jobs::{CacheMaintenanceJob, JobRunner, ListRefreshJob};
use std::sync::Arc;
use tokio::time::{sleep, timeout, Duration};
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::{MockCacheBackend, MockListBackupRepository, MockListProvider};

fn cache_store(backend: MockCacheBackend) -> Arc<CacheStore> {
    Arc::new(CacheStore::local_only(
        Arc::new(backend),
        Arc::new(CacheStrategyRegistry::new()),
    ))
}

fn refresh_use_case(
    provider: &MockListProvider,
    catalog: Arc<ListCatalog>,
) -> Arc<RefreshListUseCase> {
    Arc::new(RefreshListUseCase::new(
        Arc::new(provider.clone()),
        Arc::new(MockListBackupRepository::default()),
        catalog,
        cache_store(MockCacheBackend::default()),
        Duration::from_millis(200),
    ))
}

// ============================================================================
// Tests: ListRefreshJob
// ============================================================================

#[tokio::test]
async fn test_job_refreshes_immediately_on_start() {
    // Arrange
    let provider = MockListProvider::with_items(&["Aspirin", "Warfarin"]);
    let catalog = Arc::new(ListCatalog::new(5));
    let token = CancellationToken::new();
    let job = ListRefreshJob::new(
        refresh_use_case(&provider, catalog.clone()),
        ListCategory::Drugs,
        Duration::from_secs(3600),
    )
    .with_cancellation(token.clone());

    // Act
    let handle = Arc::new(job).start();
    sleep(Duration::from_millis(50)).await;

    // Assert
    assert_eq!(provider.fetch_count(), 1);
    let list = catalog.current(ListCategory::Drugs);
    assert_eq!(list.source, ListSource::PrimaryApi);
    assert_eq!(list.count, 2);

    token.cancel();
    timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();
}

#[tokio::test]
async fn test_job_repeats_on_interval() {
    let provider = MockListProvider::with_items(&["Asthma"]);
    let catalog = Arc::new(ListCatalog::new(5));
    let token = CancellationToken::new();
    let job = ListRefreshJob::new(
        refresh_use_case(&provider, catalog),
        ListCategory::Diseases,
        Duration::from_millis(40),
    )
    .with_cancellation(token.clone());

    let handle = Arc::new(job).start();
    sleep(Duration::from_millis(150)).await;
    token.cancel();
    timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();

    assert!(provider.fetch_count() >= 3);
}

#[tokio::test]
async fn test_failing_cycles_keep_previous_list() {
    // Arrange - first cycle succeeds, later cycles fail
    let provider = MockListProvider::with_items(&["Aspirin"]);
    let catalog = Arc::new(ListCatalog::new(5));
    let token = CancellationToken::new();
    let job = ListRefreshJob::new(
        refresh_use_case(&provider, catalog.clone()),
        ListCategory::Drugs,
        Duration::from_millis(30),
    )
    .with_cancellation(token.clone());

    // Act
    let handle = Arc::new(job).start();
    sleep(Duration::from_millis(15)).await;
    provider.set_should_fail(true);
    sleep(Duration::from_millis(100)).await;
    token.cancel();
    timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();

    // Assert
    let list = catalog.current(ListCategory::Drugs);
    assert_eq!(list.items, vec!["Aspirin".to_string()]);
    let status = catalog.status(ListCategory::Drugs);
    assert!(status.consecutive_failures >= 1);
    assert!(status.last_success_at.is_some());
}

#[tokio::test]
async fn test_cancellation_stops_further_refreshes() {
    let provider = MockListProvider::with_items(&["Aspirin"]);
    let token = CancellationToken::new();
    let job = ListRefreshJob::new(
        refresh_use_case(&provider, Arc::new(ListCatalog::new(5))),
        ListCategory::Drugs,
        Duration::from_millis(20),
    )
    .with_cancellation(token.clone());

    let handle = Arc::new(job).start();
    sleep(Duration::from_millis(30)).await;
    token.cancel();
    timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();
    let after_cancel = provider.fetch_count();
    sleep(Duration::from_millis(80)).await;

    assert_eq!(provider.fetch_count(), after_cancel);
}

// ============================================================================
// Tests: JobRunner / CacheMaintenanceJob
// ============================================================================

#[tokio::test]
async fn test_runner_starts_every_registered_job() {
    // Arrange
    let provider = MockListProvider::with_items(&["Item"]);
    let catalog = Arc::new(ListCatalog::new(5));
    let refresh = refresh_use_case(&provider, catalog.clone());
    let backend = MockCacheBackend::default();
    let token = CancellationToken::new();

    // Act
    let handles = JobRunner::new()
        .with_list_refresh(
            ListRefreshJob::new(refresh.clone(), ListCategory::Drugs, Duration::from_secs(3600))
                .with_cancellation(token.clone()),
        )
        .with_list_refresh(
            ListRefreshJob::new(refresh, ListCategory::Diseases, Duration::from_secs(3600))
                .with_cancellation(token.clone()),
        )
        .with_cache_maintenance(
            CacheMaintenanceJob::new(cache_store(backend.clone())).with_cancellation(token.clone()),
        )
        .start();
    sleep(Duration::from_millis(50)).await;
    token.cancel();
    for handle in handles {
        timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();
    }

    // Assert
    assert_eq!(provider.fetch_count(), 2);
    assert_eq!(catalog.current(ListCategory::Drugs).source, ListSource::PrimaryApi);
    assert_eq!(catalog.current(ListCategory::Diseases).source, ListSource::PrimaryApi);
    assert_eq!(backend.purge_count(), 1);
}
