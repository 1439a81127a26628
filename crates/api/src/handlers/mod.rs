pub mod health;
pub mod lists;
pub mod research;
pub mod status;
pub mod symptoms;

pub use health::health_check;
pub use lists::{get_list, refresh_list};
pub use research::{search_literature, search_trials};
pub use status::{get_category_status, get_status};
pub use symptoms::resolve_symptoms;

use axum::http::StatusCode;
use medref_domain::ListCategory;
use tracing::debug;

/// Path segment → list category; unknown names are a 404.
pub(crate) fn parse_category(raw: &str) -> Result<ListCategory, (StatusCode, String)> {
    raw.parse::<ListCategory>().map_err(|e| {
        debug!(category = raw, "Unknown list category requested");
        (StatusCode::NOT_FOUND, e.to_string())
    })
}
