pub mod criteria;
pub mod repository;
pub mod saved_search;

pub use criteria::{FilterCriteria, FilterField};
pub use repository::SavedSearchRepository;
pub use saved_search::{NewSavedSearch, SavedSearch, SavedSearchId, SavedSearchName};
