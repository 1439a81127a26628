mod get_cached_list;
mod get_refresh_status;
mod refresh_list;
mod seed_catalog;

pub use get_cached_list::GetCachedListUseCase;
pub use get_refresh_status::GetRefreshStatusUseCase;
pub use refresh_list::RefreshListUseCase;
pub use seed_catalog::SeedListCatalogUseCase;
