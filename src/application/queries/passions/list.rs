use super::PassionQueryService;
use crate::{
    application::{dto::PassionDto, error::ApplicationResult},
    domain::passion::PassionCatalog,
};

impl PassionQueryService {
    pub async fn list_passions(&self) -> ApplicationResult<Vec<PassionDto>> {
        let passions = self.repo.list_all().await?;
        Ok(passions.into_iter().map(Into::into).collect())
    }

    pub async fn load_catalog(&self) -> ApplicationResult<PassionCatalog> {
        let passions = self.repo.list_all().await?;
        tracing::debug!(count = passions.len(), "passion catalog loaded");
        Ok(PassionCatalog::new(passions))
    }
}
