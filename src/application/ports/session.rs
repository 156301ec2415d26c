// src/application/ports/session.rs
use crate::application::{ApplicationResult, dto::Session};
use async_trait::async_trait;

#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// The signed-in session, or `None` for anonymous visitors.
    async fn current_session(&self) -> ApplicationResult<Option<Session>>;
}
