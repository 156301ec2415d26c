// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::Session};

pub trait AccessTokenVerifier: Send + Sync {
    /// Validate a bearer token issued by the hosted auth platform and return the
    /// session it describes. Expired or tampered tokens are `Unauthorized`.
    fn verify(&self, token: &str) -> ApplicationResult<Session>;
}
