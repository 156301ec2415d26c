use crate::domain::errors::DomainResult;
use crate::domain::passion::PassionId;
use crate::domain::profile::{search_result::SearchResult, value_objects::Gender};
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Arguments of one remote profile search.
///
/// `passion_ids` is `None` when no passion filter applies. An empty list would
/// mean "profiles with zero passions" to the backend, so it is never sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileSearchRequest {
    pub query: Option<String>,
    pub location: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub language: Option<String>,
    pub gender: Option<Gender>,
    pub passion_ids: Option<Vec<PassionId>>,
    pub limit: u32,
    pub offset: u32,
    pub current_user_id: Option<UserId>,
}

#[async_trait]
pub trait ProfileSearchGateway: Send + Sync {
    /// Returns at most `request.limit` rows. Ordering is the backend's concern.
    async fn search(&self, request: ProfileSearchRequest) -> DomainResult<Vec<SearchResult>>;
}
