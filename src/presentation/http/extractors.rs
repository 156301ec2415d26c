// src/presentation/http/extractors.rs
use crate::{
    application::{dto::Session, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// A request carrying a valid platform access token.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Session);

/// Anonymous visitors are allowed; a token, when present, must be valid.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<Session>);

async fn app_state<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError> {
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::Infrastructure(
                "application state missing".into(),
            ))
        })?;
    Ok(app_state)
}

impl<S: Send + Sync> FromRequestParts<S> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::Unauthorized(
                    "missing Authorization header".into(),
                ))
            })?;

        let session = app_state
            .services
            .authenticate(header.token())
            .map_err(HttpError::from_error)?;

        Ok(Self(session))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for MaybeAuthenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;

        if let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() {
            let session = app_state
                .services
                .authenticate(header.token())
                .map_err(HttpError::from_error)?;
            Ok(Self(Some(session)))
        } else {
            Ok(Self(None))
        }
    }
}
