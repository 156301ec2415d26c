// src/infrastructure/security/session.rs
use crate::application::{
    ApplicationResult, dto::Session, ports::security::AccessTokenVerifier,
    ports::session::SessionProvider,
};
use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

/// Session source for a client holding the platform access token. The token is
/// re-verified on every lookup so an expired session reads as anonymous.
pub struct TokenSessionProvider {
    verifier: Arc<dyn AccessTokenVerifier>,
    token: RwLock<Option<String>>,
}

impl TokenSessionProvider {
    pub fn new(verifier: Arc<dyn AccessTokenVerifier>, token: Option<String>) -> Self {
        Self {
            verifier,
            token: RwLock::new(token),
        }
    }

    pub fn sign_in(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    pub fn sign_out(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[async_trait]
impl SessionProvider for TokenSessionProvider {
    async fn current_session(&self) -> ApplicationResult<Option<Session>> {
        let token = self
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let Some(token) = token else {
            return Ok(None);
        };

        match self.verifier.verify(&token) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                tracing::debug!(error = %err, "stored access token no longer valid");
                Ok(None)
            }
        }
    }
}
