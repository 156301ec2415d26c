pub mod gateway;
pub mod search_result;
pub mod value_objects;

pub use gateway::{ProfileSearchGateway, ProfileSearchRequest};
pub use search_result::SearchResult;
pub use value_objects::Gender;
