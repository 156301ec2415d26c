use super::SavedSearchCommandService;
use crate::application::{
    dto::{SavedSearchDto, Session},
    error::ApplicationResult,
};

impl SavedSearchCommandService {
    pub async fn list_saved_searches(
        &self,
        actor: &Session,
    ) -> ApplicationResult<Vec<SavedSearchDto>> {
        let searches = self.repo.list_for_user(actor.user_id).await?;
        Ok(searches.into_iter().map(Into::into).collect())
    }
}
