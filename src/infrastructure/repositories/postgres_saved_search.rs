use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::passion::PassionId;
use crate::domain::profile::Gender;
use crate::domain::search::{
    NewSavedSearch, SavedSearch, SavedSearchId, SavedSearchName, SavedSearchRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresSavedSearchRepository {
    pool: PgPool,
}

impl PostgresSavedSearchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SAVED_SEARCH_COLUMNS: &str = "id::int8 AS id, user_id, name, query, location, \
     min_age::int4 AS min_age, max_age::int4 AS max_age, language, gender, \
     COALESCE(passion_ids::int8[], '{}') AS passion_ids, created_at";

#[derive(Debug, FromRow)]
struct SavedSearchRow {
    id: i64,
    user_id: Uuid,
    name: String,
    query: Option<String>,
    location: Option<String>,
    min_age: Option<i32>,
    max_age: Option<i32>,
    language: Option<String>,
    gender: Option<String>,
    passion_ids: Vec<i64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<SavedSearchRow> for SavedSearch {
    type Error = DomainError;

    fn try_from(row: SavedSearchRow) -> Result<Self, Self::Error> {
        Ok(SavedSearch {
            id: SavedSearchId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            name: SavedSearchName::new(row.name)?,
            query: row.query,
            location: row.location,
            min_age: row.min_age,
            max_age: row.max_age,
            language: row.language,
            gender: Gender::parse_optional(row.gender.as_deref())?,
            passion_ids: row
                .passion_ids
                .into_iter()
                .map(PassionId::new)
                .collect::<DomainResult<_>>()?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl SavedSearchRepository for PostgresSavedSearchRepository {
    async fn list_for_user(&self, user_id: UserId) -> DomainResult<Vec<SavedSearch>> {
        let sql = format!(
            "SELECT {SAVED_SEARCH_COLUMNS} FROM saved_searches
             WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, SavedSearchRow>(&sql)
            .bind(Uuid::from(user_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(SavedSearch::try_from).collect()
    }

    async fn insert(&self, search: NewSavedSearch) -> DomainResult<SavedSearch> {
        let NewSavedSearch {
            user_id,
            name,
            query,
            location,
            min_age,
            max_age,
            language,
            gender,
            passion_ids,
        } = search;
        let passion_ids: Vec<i64> = passion_ids.into_iter().map(i64::from).collect();

        let sql = format!(
            "INSERT INTO saved_searches
                (user_id, name, query, location, min_age, max_age, language, gender, passion_ids)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {SAVED_SEARCH_COLUMNS}"
        );
        let row = sqlx::query_as::<_, SavedSearchRow>(&sql)
            .bind(Uuid::from(user_id))
            .bind(name.as_str())
            .bind(query)
            .bind(location)
            .bind(min_age)
            .bind(max_age)
            .bind(language)
            .bind(gender.map(|gender| gender.as_str()))
            .bind(passion_ids)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        SavedSearch::try_from(row)
    }

    async fn delete(&self, user_id: UserId, id: SavedSearchId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM saved_searches WHERE id = $1 AND user_id = $2")
            .bind(i64::from(id))
            .bind(Uuid::from(user_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            tracing::debug!(saved_search_id = %id, "delete matched no saved search");
        }
        Ok(())
    }
}
