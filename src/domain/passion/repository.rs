use crate::domain::errors::DomainResult;
use crate::domain::passion::entity::Passion;
use async_trait::async_trait;

#[async_trait]
pub trait PassionRepository: Send + Sync {
    /// Every passion known to the platform, in catalog order.
    async fn list_all(&self) -> DomainResult<Vec<Passion>>;
}
