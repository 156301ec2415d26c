use crate::domain::profile::Gender;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use utoipa::ToSchema;

/// Search intent as edited on the discovery page.
///
/// Text fields keep the form's empty-string default; blank means "no filter".
/// No cross-field validation happens here: `min_age > max_age` is kept as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct FilterCriteria {
    pub keyword: String,
    pub location: String,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub language: String,
    pub gender: Option<Gender>,
    #[schema(value_type = Vec<String>)]
    pub passion_names: BTreeSet<String>,
}

/// One edit to a single criteria field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterField {
    Keyword(String),
    Location(String),
    MinAge(Option<i32>),
    MaxAge(Option<i32>),
    Language(String),
    Gender(Option<Gender>),
    Passions(BTreeSet<String>),
    TogglePassion(String),
}

impl FilterCriteria {
    /// Assign one field. Returns whether the criteria actually changed.
    pub fn set_field(&mut self, field: FilterField) -> bool {
        match field {
            FilterField::Keyword(value) => replace(&mut self.keyword, value),
            FilterField::Location(value) => replace(&mut self.location, value),
            FilterField::MinAge(value) => replace(&mut self.min_age, value),
            FilterField::MaxAge(value) => replace(&mut self.max_age, value),
            FilterField::Language(value) => replace(&mut self.language, value),
            FilterField::Gender(value) => replace(&mut self.gender, value),
            FilterField::Passions(value) => replace(&mut self.passion_names, value),
            FilterField::TogglePassion(name) => {
                if !self.passion_names.remove(&name) {
                    self.passion_names.insert(name);
                }
                true
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn keyword_filter(&self) -> Option<&str> {
        non_blank(&self.keyword)
    }

    pub fn location_filter(&self) -> Option<&str> {
        non_blank(&self.location)
    }

    pub fn language_filter(&self) -> Option<&str> {
        non_blank(&self.language)
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
