use std::sync::Arc;

use crate::domain::passion::PassionRepository;

pub struct PassionQueryService {
    pub(super) repo: Arc<dyn PassionRepository>,
}

impl PassionQueryService {
    pub fn new(repo: Arc<dyn PassionRepository>) -> Self {
        Self { repo }
    }
}
