// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Response, StatusCode};
use chrono::{Duration, Utc};
use serde_json::{Value, json};

use super::builders::user_id;
use super::mocks::{
    InMemorySavedSearchRepo, ScriptedSearchGateway, StaticPassionRepo, StaticSessionProvider,
};
use skillogue_discovery::application::{
    discovery::DiscoveryController, dto::Session, services::ApplicationServices,
};
use skillogue_discovery::domain::user::UserId;
use skillogue_discovery::infrastructure::security::access_token::{
    Hs256AccessTokenVerifier, sign_hs256,
};
use skillogue_discovery::presentation::http::{
    routes::build_router_with_rate_limiter, state::HttpState,
};

pub const TEST_SECRET: &[u8] = b"test-secret-test-secret-test-secret!";

pub const DEFAULT_PASSIONS: &[(i64, &str)] = &[(1, "Coding"), (2, "Hiking"), (5, "Chess")];

pub fn viewer_id() -> UserId {
    user_id(0)
}

pub fn viewer_session() -> Session {
    Session {
        user_id: viewer_id(),
        email: Some("viewer@skillogue.test".into()),
        expires_at: Utc::now() + Duration::hours(1),
    }
}

/// Signed access token for `user`, expiring `ttl` from now (negative = expired).
pub fn bearer_token(user: UserId, ttl: Duration) -> String {
    let claims = json!({
        "sub": user.to_string(),
        "exp": (Utc::now() + ttl).timestamp(),
        "email": "viewer@skillogue.test",
    });
    sign_hs256(TEST_SECRET, &claims).unwrap()
}

pub struct TestHarness {
    pub gateway: Arc<ScriptedSearchGateway>,
    pub passions: Arc<StaticPassionRepo>,
    pub saved: Arc<InMemorySavedSearchRepo>,
    pub services: Arc<ApplicationServices>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_saved(InMemorySavedSearchRepo::new())
    }

    pub fn with_saved(saved: InMemorySavedSearchRepo) -> Self {
        Self::build(StaticPassionRepo::new(DEFAULT_PASSIONS), saved)
    }

    pub fn build(passions: StaticPassionRepo, saved: InMemorySavedSearchRepo) -> Self {
        let gateway = Arc::new(ScriptedSearchGateway::new());
        let passions = Arc::new(passions);
        let saved = Arc::new(saved);
        let verifier = Arc::new(Hs256AccessTokenVerifier::new(TEST_SECRET.to_vec()).unwrap());

        let services = Arc::new(ApplicationServices::new(
            gateway.clone(),
            passions.clone(),
            saved.clone(),
            verifier,
        ));

        Self {
            gateway,
            passions,
            saved,
            services,
        }
    }

    pub fn signed_in_controller(&self) -> DiscoveryController {
        self.controller(Some(viewer_session()))
    }

    pub fn anonymous_controller(&self) -> DiscoveryController {
        self.controller(None)
    }

    pub fn controller(&self, session: Option<Session>) -> DiscoveryController {
        self.services
            .discovery_controller(Arc::new(StaticSessionProvider(session)))
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router_with_rate_limiter(state, false)
    }
}

pub async fn read_json(resp: Response<Body>) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!(
                "expected JSON body, got: {}",
                String::from_utf8_lossy(&bytes)
            )
        })
    };
    (status, value)
}
