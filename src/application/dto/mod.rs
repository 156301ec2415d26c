pub mod auth;
pub mod cards;
pub mod pagination;
pub mod passions;
pub mod saved_searches;

pub use auth::Session;
pub use cards::{PRIVATE_PROFILE_MARKER, PrivateCard, PublicCard, ResultCard};
pub use pagination::OffsetPage;
pub use passions::PassionDto;
pub use saved_searches::SavedSearchDto;
