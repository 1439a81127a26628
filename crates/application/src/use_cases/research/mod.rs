mod search_literature;
mod search_trials;

pub use search_literature::{LiteratureProvider, SearchLiteratureUseCase};
pub use search_trials::{SearchClinicalTrialsUseCase, TrialRegistryProvider};
