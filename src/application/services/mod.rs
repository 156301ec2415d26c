// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::saved_searches::SavedSearchCommandService,
        discovery::DiscoveryController,
        dto::Session,
        ports::{AccessTokenVerifierPort, SessionProviderPort},
        queries::{discovery::DiscoveryQueryService, passions::PassionQueryService},
    },
    domain::{
        passion::PassionRepository, profile::ProfileSearchGateway,
        search::SavedSearchRepository,
    },
};

pub struct ApplicationServices {
    pub discovery_queries: Arc<DiscoveryQueryService>,
    pub passion_queries: Arc<PassionQueryService>,
    pub saved_searches: Arc<SavedSearchCommandService>,
    token_verifier: Arc<AccessTokenVerifierPort>,
}

impl ApplicationServices {
    pub fn new(
        search_gateway: Arc<dyn ProfileSearchGateway>,
        passion_repo: Arc<dyn PassionRepository>,
        saved_search_repo: Arc<dyn SavedSearchRepository>,
        token_verifier: Arc<AccessTokenVerifierPort>,
    ) -> Self {
        let discovery_queries = Arc::new(DiscoveryQueryService::new(Arc::clone(&search_gateway)));
        let passion_queries = Arc::new(PassionQueryService::new(Arc::clone(&passion_repo)));
        let saved_searches = Arc::new(SavedSearchCommandService::new(Arc::clone(
            &saved_search_repo,
        )));

        Self {
            discovery_queries,
            passion_queries,
            saved_searches,
            token_verifier,
        }
    }

    pub fn token_verifier(&self) -> Arc<AccessTokenVerifierPort> {
        Arc::clone(&self.token_verifier)
    }

    /// Resolve a raw bearer token into the session it carries.
    pub fn authenticate(&self, token: &str) -> ApplicationResult<Session> {
        self.token_verifier.verify(token)
    }

    /// A fresh page-scoped discovery controller sharing these services.
    pub fn discovery_controller(
        &self,
        sessions: Arc<SessionProviderPort>,
    ) -> DiscoveryController {
        DiscoveryController::new(
            Arc::clone(&self.discovery_queries),
            Arc::clone(&self.passion_queries),
            Arc::clone(&self.saved_searches),
            sessions,
        )
    }
}
