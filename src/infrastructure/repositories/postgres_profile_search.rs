use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::{Gender, ProfileSearchGateway, ProfileSearchRequest, SearchResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Calls the platform's `search_profiles` database function.
#[derive(Clone)]
pub struct PostgresProfileSearchGateway {
    pool: PgPool,
}

impl PostgresProfileSearchGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SearchResultRow {
    id: Uuid,
    full_name: Option<String>,
    username: Option<String>,
    about_me: Option<String>,
    location: Option<String>,
    age: Option<i32>,
    gender: Option<String>,
    profile_languages: Option<Vec<String>>,
    profilepassions: Option<Vec<String>>,
    is_private: Option<bool>,
    show_age: Option<bool>,
    show_location: Option<bool>,
}

impl TryFrom<SearchResultRow> for SearchResult {
    type Error = DomainError;

    fn try_from(row: SearchResultRow) -> Result<Self, Self::Error> {
        Ok(SearchResult {
            id: UserId::new(row.id)?,
            full_name: row.full_name.unwrap_or_default(),
            username: row.username,
            about_me: row.about_me,
            location: row.location,
            age: row.age,
            gender: Gender::parse_optional(row.gender.as_deref())?,
            profile_languages: row.profile_languages.unwrap_or_default(),
            profilepassions: row.profilepassions.unwrap_or_default(),
            is_private: row.is_private.unwrap_or(false),
            show_age: row.show_age,
            show_location: row.show_location,
        })
    }
}

#[async_trait]
impl ProfileSearchGateway for PostgresProfileSearchGateway {
    async fn search(&self, request: ProfileSearchRequest) -> DomainResult<Vec<SearchResult>> {
        let passion_ids: Option<Vec<i64>> = request
            .passion_ids
            .map(|ids| ids.into_iter().map(i64::from).collect());

        let rows = sqlx::query_as::<_, SearchResultRow>(
            r#"
            SELECT id, full_name, username, about_me, location, age::int4 AS age, gender,
                   profile_languages, profilepassions, is_private, show_age, show_location
            FROM search_profiles(
                p_query => $1,
                p_location => $2,
                p_min_age => $3,
                p_max_age => $4,
                p_language => $5,
                p_gender => $6,
                p_passion_ids => $7,
                p_limit => $8,
                p_offset => $9,
                p_current_user_id => $10
            )
            "#,
        )
        .bind(request.query)
        .bind(request.location)
        .bind(request.min_age)
        .bind(request.max_age)
        .bind(request.language)
        .bind(request.gender.map(|gender| gender.as_str()))
        .bind(passion_ids)
        .bind(i64::from(request.limit))
        .bind(i64::from(request.offset))
        .bind(request.current_user_id.map(Uuid::from))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(SearchResult::try_from).collect()
    }
}
