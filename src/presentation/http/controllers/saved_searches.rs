// src/presentation/http/controllers/saved_searches.rs
use crate::application::{
    commands::saved_searches::{DeleteSavedSearchCommand, SaveSearchCommand},
    dto::SavedSearchDto,
};
use crate::domain::search::FilterCriteria;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSavedSearchRequest {
    pub name: String,
    #[serde(default)]
    pub criteria: FilterCriteria,
}

#[utoipa::path(
    get,
    path = "/api/v1/saved-searches",
    responses(
        (status = 200, description = "Saved searches of the signed-in user.", body = [SavedSearchDto]),
        (status = 401, description = "Missing or invalid access token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Saved searches"
)]
pub async fn list_saved_searches(
    Extension(state): Extension<HttpState>,
    Authenticated(session): Authenticated,
) -> HttpResult<Json<Vec<SavedSearchDto>>> {
    state
        .services
        .saved_searches
        .list_saved_searches(&session)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/saved-searches",
    request_body = CreateSavedSearchRequest,
    responses(
        (status = 201, description = "Saved search created.", body = SavedSearchDto),
        (status = 400, description = "Blank name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid access token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Saved searches"
)]
pub async fn create_saved_search(
    Extension(state): Extension<HttpState>,
    Authenticated(session): Authenticated,
    Json(payload): Json<CreateSavedSearchRequest>,
) -> HttpResult<(StatusCode, Json<SavedSearchDto>)> {
    let catalog = state
        .services
        .passion_queries
        .load_catalog()
        .await
        .into_http()?;

    let command = SaveSearchCommand {
        name: payload.name,
        criteria: payload.criteria,
    };

    state
        .services
        .saved_searches
        .save_search(&session, &catalog, command)
        .await
        .into_http()
        .map(|saved| (StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/saved-searches/{id}",
    params(("id" = i64, Path, description = "Saved search id")),
    responses(
        (status = 200, description = "Saved search removed (or already absent)."),
        (status = 401, description = "Missing or invalid access token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Saved searches"
)]
pub async fn delete_saved_search(
    Extension(state): Extension<HttpState>,
    Authenticated(session): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .saved_searches
        .delete_saved_search(&session, DeleteSavedSearchCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
