//! Display variants for discovery results.
//!
//! A private profile exposes nothing beyond identity and name, whatever its
//! individual `show_age` / `show_location` flags say. Public profiles show
//! every field except the ones explicitly hidden.

use crate::domain::profile::{Gender, SearchResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const PRIVATE_PROFILE_MARKER: &str = "Private Profile";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum ResultCard {
    Public(PublicCard),
    Private(PrivateCard),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublicCard {
    pub id: Uuid,
    pub full_name: String,
    pub username: Option<String>,
    pub about_me: Option<String>,
    pub location: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub languages: Vec<String>,
    pub passions: Vec<String>,
    pub message_recipient: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PrivateCard {
    pub id: Uuid,
    pub full_name: String,
    pub username: Option<String>,
    pub marker: String,
    pub message_recipient: Uuid,
}

impl ResultCard {
    pub fn present(result: &SearchResult) -> Self {
        let id = result.id.as_uuid();
        if result.is_private {
            return Self::Private(PrivateCard {
                id,
                full_name: result.full_name.clone(),
                username: result.username.clone(),
                marker: PRIVATE_PROFILE_MARKER.to_string(),
                message_recipient: id,
            });
        }

        Self::Public(PublicCard {
            id,
            full_name: result.full_name.clone(),
            username: result.username.clone(),
            about_me: result.about_me.clone(),
            location: result
                .location
                .clone()
                .filter(|_| result.location_visible()),
            age: result.age.filter(|_| result.age_visible()),
            gender: result.gender,
            languages: result.profile_languages.clone(),
            passions: result.profilepassions.clone(),
            message_recipient: id,
        })
    }

    pub fn id(&self) -> Uuid {
        match self {
            Self::Public(card) => card.id,
            Self::Private(card) => card.id,
        }
    }

    pub fn message_recipient(&self) -> Uuid {
        match self {
            Self::Public(card) => card.message_recipient,
            Self::Private(card) => card.message_recipient,
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private(_))
    }
}

impl From<&SearchResult> for ResultCard {
    fn from(result: &SearchResult) -> Self {
        Self::present(result)
    }
}

impl From<SearchResult> for ResultCard {
    fn from(result: SearchResult) -> Self {
        Self::present(&result)
    }
}
