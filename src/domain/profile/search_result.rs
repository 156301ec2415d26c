use crate::domain::profile::value_objects::Gender;
use crate::domain::user::UserId;

/// A profile row as returned by the remote search. Never mutated after fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub id: UserId,
    pub full_name: String,
    pub username: Option<String>,
    pub about_me: Option<String>,
    pub location: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub profile_languages: Vec<String>,
    pub profilepassions: Vec<String>,
    pub is_private: bool,
    pub show_age: Option<bool>,
    pub show_location: Option<bool>,
}

impl SearchResult {
    /// Only an explicit `false` hides the age.
    pub fn age_visible(&self) -> bool {
        self.show_age != Some(false)
    }

    /// Only an explicit `false` hides the location.
    pub fn location_visible(&self) -> bool {
        self.show_location != Some(false)
    }
}
