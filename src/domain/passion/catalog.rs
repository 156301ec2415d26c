use crate::domain::passion::entity::{Passion, PassionId};
use std::collections::HashMap;

/// Bidirectional lookup between passion labels and the numeric ids the search
/// backend expects.
///
/// Names are not unique in the underlying table. When two passions share a
/// name, the first one in catalog order wins for name lookups.
#[derive(Debug, Clone, Default)]
pub struct PassionCatalog {
    passions: Vec<Passion>,
    by_id: HashMap<PassionId, usize>,
    by_name: HashMap<String, PassionId>,
}

/// Outcome of translating a selection through the catalog. `missing` holds the
/// inputs that had no catalog entry and were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation<T, M> {
    pub found: Vec<T>,
    pub missing: Vec<M>,
}

impl PassionCatalog {
    pub fn new(passions: Vec<Passion>) -> Self {
        let mut by_id = HashMap::with_capacity(passions.len());
        let mut by_name = HashMap::with_capacity(passions.len());
        for (index, passion) in passions.iter().enumerate() {
            by_id.entry(passion.id).or_insert(index);
            by_name.entry(passion.name.clone()).or_insert(passion.id);
        }
        Self {
            passions,
            by_id,
            by_name,
        }
    }

    pub fn passions(&self) -> &[Passion] {
        &self.passions
    }

    pub fn len(&self) -> usize {
        self.passions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passions.is_empty()
    }

    pub fn name_of(&self, id: PassionId) -> Option<&str> {
        self.by_id
            .get(&id)
            .map(|index| self.passions[*index].name.as_str())
    }

    pub fn id_of(&self, name: &str) -> Option<PassionId> {
        self.by_name.get(name).copied()
    }

    pub fn ids_for_names<'a, I>(&self, names: I) -> Translation<PassionId, String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut found = Vec::new();
        let mut missing = Vec::new();
        for name in names {
            match self.id_of(name) {
                Some(id) => found.push(id),
                None => missing.push(name.clone()),
            }
        }
        Translation { found, missing }
    }

    pub fn names_for_ids<'a, I>(&self, ids: I) -> Translation<String, PassionId>
    where
        I: IntoIterator<Item = &'a PassionId>,
    {
        let mut found = Vec::new();
        let mut missing = Vec::new();
        for id in ids {
            match self.name_of(*id) {
                Some(name) => found.push(name.to_string()),
                None => missing.push(*id),
            }
        }
        Translation { found, missing }
    }
}
