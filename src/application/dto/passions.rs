use crate::domain::passion::Passion;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PassionDto {
    pub id: i64,
    pub name: String,
}

impl From<Passion> for PassionDto {
    fn from(passion: Passion) -> Self {
        Self {
            id: passion.id.into(),
            name: passion.name,
        }
    }
}

impl From<&Passion> for PassionDto {
    fn from(passion: &Passion) -> Self {
        Self {
            id: passion.id.into(),
            name: passion.name.clone(),
        }
    }
}
