use crate::{
    application::dto::SavedSearchDto,
    domain::{
        passion::{PassionCatalog, PassionId},
        search::{FilterCriteria, FilterField},
    },
};

/// Holds the criteria currently shown in the filter form.
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    criteria: FilterCriteria,
}

impl FilterStore {
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Plain assignment; searching is the caller's decision.
    pub fn set_field(&mut self, field: FilterField) -> bool {
        self.criteria.set_field(field)
    }

    pub fn reset_all(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Replace every field with the snapshot's values. Passion ids without a
    /// catalog entry are dropped.
    pub fn load_from_snapshot(&mut self, snapshot: &SavedSearchDto, catalog: &PassionCatalog) {
        let ids: Vec<PassionId> = snapshot.passion_ids.iter().copied().map(PassionId).collect();
        let translation = catalog.names_for_ids(ids.iter());
        if !translation.missing.is_empty() {
            tracing::debug!(
                saved_search_id = snapshot.id,
                missing = ?translation.missing,
                "saved search references passions missing from catalog"
            );
        }

        self.criteria = FilterCriteria {
            keyword: snapshot.query.clone().unwrap_or_default(),
            location: snapshot.location.clone().unwrap_or_default(),
            min_age: snapshot.min_age,
            max_age: snapshot.max_age,
            language: snapshot.language.clone().unwrap_or_default(),
            gender: snapshot.gender,
            passion_names: translation.found.into_iter().collect(),
        };
    }
}
