use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassionId(pub i64);

impl PassionId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("passion id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PassionId> for i64 {
    fn from(value: PassionId) -> Self {
        value.0
    }
}

impl fmt::Display for PassionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passion {
    pub id: PassionId,
    pub name: String,
}

impl Passion {
    pub fn new(id: PassionId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::Validation("passion name cannot be empty".into()));
        }
        Ok(Self { id, name })
    }
}
