mod search;
mod service;

pub use search::{PAGE_SIZE, SearchProfilesQuery, build_request, page_offset};
pub use service::DiscoveryQueryService;
