// src/application/commands/saved_searches/service.rs
use std::sync::Arc;

use crate::domain::search::SavedSearchRepository;

pub struct SavedSearchCommandService {
    pub(super) repo: Arc<dyn SavedSearchRepository>,
}

impl SavedSearchCommandService {
    pub fn new(repo: Arc<dyn SavedSearchRepository>) -> Self {
        Self { repo }
    }
}
