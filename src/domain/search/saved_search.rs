use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::passion::PassionId;
use crate::domain::profile::Gender;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SavedSearchId(pub i64);

impl SavedSearchId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "saved search id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<SavedSearchId> for i64 {
    fn from(value: SavedSearchId) -> Self {
        value.0
    }
}

impl fmt::Display for SavedSearchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSearchName(String);

impl SavedSearchName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "saved search name cannot be empty".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SavedSearchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SavedSearchName> for String {
    fn from(value: SavedSearchName) -> Self {
        value.0
    }
}

/// Persisted snapshot of filter criteria. Passions are stored by id.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedSearch {
    pub id: SavedSearchId,
    pub user_id: UserId,
    pub name: SavedSearchName,
    pub query: Option<String>,
    pub location: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub language: Option<String>,
    pub gender: Option<Gender>,
    pub passion_ids: Vec<PassionId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSavedSearch {
    pub user_id: UserId,
    pub name: SavedSearchName,
    pub query: Option<String>,
    pub location: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub language: Option<String>,
    pub gender: Option<Gender>,
    pub passion_ids: Vec<PassionId>,
}
