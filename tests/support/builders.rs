// tests/support/builders.rs
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use skillogue_discovery::domain::passion::PassionId;
use skillogue_discovery::domain::profile::{Gender, SearchResult};
use skillogue_discovery::domain::search::{SavedSearch, SavedSearchId, SavedSearchName};
use skillogue_discovery::domain::user::UserId;

/// Deterministic, non-nil user id derived from a small seed.
pub fn user_id(seed: u128) -> UserId {
    UserId::new(Uuid::from_u128(0x1000 + seed)).unwrap()
}

pub struct SearchResultBuilder {
    result: SearchResult,
}

impl SearchResultBuilder {
    pub fn new(seed: u128) -> Self {
        Self {
            result: SearchResult {
                id: user_id(seed),
                full_name: format!("Member {seed}"),
                username: Some(format!("member{seed}")),
                about_me: Some("Likes meeting people".into()),
                location: Some("Lisbon".into()),
                age: Some(30),
                gender: Some(Gender::Female),
                profile_languages: vec!["English".into()],
                profilepassions: vec!["Coding".into()],
                is_private: false,
                show_age: None,
                show_location: None,
            },
        }
    }

    pub fn private(mut self) -> Self {
        self.result.is_private = true;
        self
    }

    pub fn show_age(mut self, show: Option<bool>) -> Self {
        self.result.show_age = show;
        self
    }

    pub fn show_location(mut self, show: Option<bool>) -> Self {
        self.result.show_location = show;
        self
    }

    pub fn full_name(mut self, name: impl Into<String>) -> Self {
        self.result.full_name = name.into();
        self
    }

    pub fn build(self) -> SearchResult {
        self.result
    }
}

/// `count` public results with seeds starting at `first`.
pub fn results(first: u128, count: u128) -> Vec<SearchResult> {
    (first..first + count)
        .map(|seed| SearchResultBuilder::new(seed).build())
        .collect()
}

pub fn saved_search(id: i64, owner: UserId, name: &str, passion_ids: &[i64]) -> SavedSearch {
    SavedSearch {
        id: SavedSearchId(id),
        user_id: owner,
        name: SavedSearchName::new(name).unwrap(),
        query: Some("rust".into()),
        location: None,
        min_age: Some(25),
        max_age: None,
        language: Some("English".into()),
        gender: None,
        passion_ids: passion_ids.iter().copied().map(PassionId).collect(),
        created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
    }
}
