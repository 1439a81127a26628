use medref_application::use_cases::{
    GetCachedListUseCase, GetRefreshStatusUseCase, RefreshListUseCase, ResolveSymptomsUseCase,
    SearchClinicalTrialsUseCase, SearchLiteratureUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_list: Arc<GetCachedListUseCase>,
    pub refresh_list: Arc<RefreshListUseCase>,
    pub get_status: Arc<GetRefreshStatusUseCase>,
    pub resolve_symptoms: Arc<ResolveSymptomsUseCase>,
    pub search_literature: Arc<SearchLiteratureUseCase>,
    pub search_trials: Arc<SearchClinicalTrialsUseCase>,
}
