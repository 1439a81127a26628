pub mod lists;
pub mod research;
pub mod symptoms;

pub use lists::{
    GetCachedListUseCase, GetRefreshStatusUseCase, RefreshListUseCase, SeedListCatalogUseCase,
};
pub use research::{SearchClinicalTrialsUseCase, SearchLiteratureUseCase};
pub use symptoms::ResolveSymptomsUseCase;
