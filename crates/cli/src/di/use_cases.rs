use super::Adapters;
use medref_api::AppState;
use medref_application::services::{CacheStore, DiseaseSymptomResolver, ListCatalog};
use medref_application::use_cases::{
    GetCachedListUseCase, GetRefreshStatusUseCase, RefreshListUseCase, ResolveSymptomsUseCase,
    SearchClinicalTrialsUseCase, SearchLiteratureUseCase, SeedListCatalogUseCase,
};
use medref_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub seed_catalog: Arc<SeedListCatalogUseCase>,
    pub get_list: Arc<GetCachedListUseCase>,
    pub refresh_list: Arc<RefreshListUseCase>,
    pub get_status: Arc<GetRefreshStatusUseCase>,
    pub resolve_symptoms: Arc<ResolveSymptomsUseCase>,
    pub search_literature: Arc<SearchLiteratureUseCase>,
    pub search_trials: Arc<SearchClinicalTrialsUseCase>,
}

impl UseCases {
    pub fn new(
        config: &Config,
        adapters: Adapters,
        catalog: Arc<ListCatalog>,
        cache: Arc<CacheStore>,
    ) -> Self {
        let timeout = config.providers.timeout();
        let page_size = config.providers.page_size;

        let refresh_list = Arc::new(
            RefreshListUseCase::new(
                adapters.list_provider,
                adapters.backup.clone(),
                catalog.clone(),
                cache.clone(),
                timeout,
            )
            .with_max_items(config.refresh.max_items),
        );

        let resolver = Arc::new(DiseaseSymptomResolver::new(
            adapters.consumer_health,
            adapters.phenotype,
            &config.resolver,
            timeout,
        ));

        Self {
            seed_catalog: Arc::new(SeedListCatalogUseCase::new(
                adapters.backup.clone(),
                catalog.clone(),
            )),
            get_list: Arc::new(GetCachedListUseCase::new(
                catalog.clone(),
                cache.clone(),
                adapters.backup,
                refresh_list.clone(),
            )),
            refresh_list,
            get_status: Arc::new(GetRefreshStatusUseCase::new(catalog, cache.clone())),
            resolve_symptoms: Arc::new(ResolveSymptomsUseCase::new(resolver, cache.clone())),
            search_literature: Arc::new(SearchLiteratureUseCase::new(
                adapters.literature,
                cache.clone(),
                timeout,
                page_size,
            )),
            search_trials: Arc::new(SearchClinicalTrialsUseCase::new(
                adapters.trial_registries,
                cache,
                timeout,
                page_size,
            )),
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            get_list: self.get_list.clone(),
            refresh_list: self.refresh_list.clone(),
            get_status: self.get_status.clone(),
            resolve_symptoms: self.resolve_symptoms.clone(),
            search_literature: self.search_literature.clone(),
            search_trials: self.search_trials.clone(),
        }
    }
}
