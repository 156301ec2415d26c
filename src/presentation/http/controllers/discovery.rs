// src/presentation/http/controllers/discovery.rs
use crate::application::{
    dto::{OffsetPage, ResultCard},
    queries::discovery::SearchProfilesQuery,
};
use crate::domain::{profile::Gender, search::FilterCriteria};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::{fmt, str::FromStr};
use utoipa::{IntoParams, ToSchema};

fn default_page() -> u32 {
    1
}

/// Blank query values (`?gender=`) mean "no filter".
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Free text matched against name and bio.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub min_age: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub max_age: Option<i32>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub gender: Option<Gender>,
    /// Comma-separated passion names.
    #[serde(default)]
    pub passions: Option<String>,
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,
}

impl SearchParams {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            keyword: self.q.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
            min_age: self.min_age,
            max_age: self.max_age,
            language: self.language.clone().unwrap_or_default(),
            gender: self.gender,
            passion_names: self
                .passions
                .as_deref()
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchPageResponse {
    pub items: Vec<ResultCard>,
    pub page: u32,
    pub has_more: bool,
}

impl From<OffsetPage<ResultCard>> for SearchPageResponse {
    fn from(page: OffsetPage<ResultCard>) -> Self {
        Self {
            items: page.items,
            page: page.page,
            has_more: page.has_more,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/discovery/search",
    params(SearchParams),
    responses(
        (status = 200, description = "One page of discovery results.", body = SearchPageResponse),
        (status = 400, description = "Invalid page or filter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Invalid access token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Discovery"
)]
pub async fn search_profiles(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<SearchPageResponse>> {
    let catalog = state
        .services
        .passion_queries
        .load_catalog()
        .await
        .into_http()?;

    let page = state
        .services
        .discovery_queries
        .search_profiles(
            viewer.0.as_ref(),
            &catalog,
            SearchProfilesQuery {
                criteria: params.criteria(),
                page: params.page,
            },
        )
        .await
        .into_http()?;

    Ok(Json(page.map(ResultCard::from).into()))
}
