use super::SavedSearchCommandService;
use crate::{
    application::{dto::Session, error::ApplicationResult},
    domain::search::SavedSearchId,
};

pub struct DeleteSavedSearchCommand {
    pub id: i64,
}

impl SavedSearchCommandService {
    pub async fn delete_saved_search(
        &self,
        actor: &Session,
        command: DeleteSavedSearchCommand,
    ) -> ApplicationResult<()> {
        let id = SavedSearchId::new(command.id)?;
        self.repo.delete(actor.user_id, id).await?;
        tracing::info!(saved_search_id = %id, user_id = %actor.user_id, "saved search deleted");
        Ok(())
    }
}
