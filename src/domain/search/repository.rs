use crate::domain::errors::DomainResult;
use crate::domain::search::saved_search::{NewSavedSearch, SavedSearch, SavedSearchId};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait SavedSearchRepository: Send + Sync {
    async fn list_for_user(&self, user_id: UserId) -> DomainResult<Vec<SavedSearch>>;
    async fn insert(&self, search: NewSavedSearch) -> DomainResult<SavedSearch>;
    /// Deleting an id the user does not own (or that does not exist) is not an error.
    async fn delete(&self, user_id: UserId, id: SavedSearchId) -> DomainResult<()>;
}
