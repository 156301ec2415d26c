use crate::domain::profile::Gender;
use crate::domain::search::SavedSearch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SavedSearchDto {
    pub id: i64,
    pub name: String,
    pub query: Option<String>,
    pub location: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub language: Option<String>,
    pub gender: Option<Gender>,
    pub passion_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<SavedSearch> for SavedSearchDto {
    fn from(search: SavedSearch) -> Self {
        Self {
            id: search.id.into(),
            name: search.name.into(),
            query: search.query,
            location: search.location,
            min_age: search.min_age,
            max_age: search.max_age,
            language: search.language,
            gender: search.gender,
            passion_ids: search.passion_ids.into_iter().map(i64::from).collect(),
            created_at: search.created_at,
        }
    }
}
