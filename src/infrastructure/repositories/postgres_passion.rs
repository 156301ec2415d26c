use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::passion::{Passion, PassionId, PassionRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPassionRepository {
    pool: PgPool,
}

impl PostgresPassionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PassionRow {
    id: i64,
    name: String,
}

impl TryFrom<PassionRow> for Passion {
    type Error = DomainError;

    fn try_from(row: PassionRow) -> Result<Self, Self::Error> {
        Passion::new(PassionId::new(row.id)?, row.name)
    }
}

#[async_trait]
impl PassionRepository for PostgresPassionRepository {
    async fn list_all(&self) -> DomainResult<Vec<Passion>> {
        let rows = sqlx::query_as::<_, PassionRow>("SELECT id::int8 AS id, name FROM passions ORDER BY name, id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Passion::try_from).collect()
    }
}
