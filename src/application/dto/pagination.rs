use serde::{Deserialize, Serialize};

/// One fixed-size window of results, addressed by a 1-based page number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct OffsetPage<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub has_more: bool,
}

impl<T> OffsetPage<T> {
    /// `has_more` is a heuristic: a full page suggests another one exists.
    pub fn new(items: Vec<T>, page: u32, page_size: u32) -> Self {
        let has_more = items.len() == page_size as usize;
        Self {
            items,
            page,
            has_more,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> OffsetPage<U> {
        OffsetPage {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            has_more: self.has_more,
        }
    }
}
