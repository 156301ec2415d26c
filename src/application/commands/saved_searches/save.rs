// src/application/commands/saved_searches/save.rs
use super::SavedSearchCommandService;
use crate::{
    application::{
        dto::{SavedSearchDto, Session},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        passion::PassionCatalog,
        search::{FilterCriteria, NewSavedSearch, SavedSearchName},
    },
};

pub struct SaveSearchCommand {
    pub name: String,
    pub criteria: FilterCriteria,
}

impl SavedSearchCommandService {
    pub async fn save_search(
        &self,
        actor: &Session,
        catalog: &PassionCatalog,
        command: SaveSearchCommand,
    ) -> ApplicationResult<SavedSearchDto> {
        let name = SavedSearchName::new(command.name).map_err(|err| match err {
            DomainError::Validation(msg) => ApplicationError::validation(msg),
            other => ApplicationError::from(other),
        })?;

        let new_search = snapshot(actor, name, &command.criteria, catalog);
        let saved = self.repo.insert(new_search).await?;
        tracing::info!(
            saved_search_id = %saved.id,
            user_id = %actor.user_id,
            "saved search created"
        );
        Ok(saved.into())
    }
}

fn snapshot(
    actor: &Session,
    name: SavedSearchName,
    criteria: &FilterCriteria,
    catalog: &PassionCatalog,
) -> NewSavedSearch {
    let translation = catalog.ids_for_names(criteria.passion_names.iter());
    if !translation.missing.is_empty() {
        tracing::debug!(missing = ?translation.missing, "saved search drops passions missing from catalog");
    }

    NewSavedSearch {
        user_id: actor.user_id,
        name,
        query: criteria.keyword_filter().map(str::to_string),
        location: criteria.location_filter().map(str::to_string),
        min_age: criteria.min_age,
        max_age: criteria.max_age,
        language: criteria.language_filter().map(str::to_string),
        gender: criteria.gender,
        passion_ids: translation.found,
    }
}
