pub mod research;
pub mod status;

pub use research::{LiteratureParams, TrialsParams};
pub use status::{CacheStatusResponse, CategoryStatusResponse, StatusResponse};
