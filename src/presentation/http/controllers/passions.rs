use crate::application::dto::PassionDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/passions",
    responses(
        (status = 200, description = "Full passion catalog.", body = [PassionDto])
    ),
    tag = "Passions"
)]
pub async fn list_passions(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<PassionDto>>> {
    state
        .services
        .passion_queries
        .list_passions()
        .await
        .into_http()
        .map(Json)
}
