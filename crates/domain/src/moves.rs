use derive_more::Deref;
use serde::Serialize;
use uuid::Uuid;

use crate::{ALL, Category, ImageRef, Name};

/// One technique of the workout catalog. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Move {
    pub id: MoveID,
    pub name: Name,
    pub category: Category,
    pub image: ImageRef,
    pub description: String,
    pub completed: bool,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct MoveID(Uuid);

impl MoveID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for MoveID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for MoveID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Conjunction of a free-text query and a category selection. The category
/// is kept as a raw label so that an unrecognized label matches nothing
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveFilter {
    pub query: String,
    pub category: String,
}

impl MoveFilter {
    #[must_use]
    pub fn new(query: &str, category: &str) -> Self {
        Self {
            query: query.to_string(),
            category: category.to_string(),
        }
    }

    /// Returns the moves matching both predicates, in iteration order.
    #[must_use]
    pub fn moves<'a>(&self, moves: impl Iterator<Item = &'a Move>) -> Vec<&'a Move> {
        moves
            .filter(|m| {
                m.name
                    .as_ref()
                    .to_lowercase()
                    .contains(self.query.to_lowercase().trim())
                    && (self.category == ALL || m.category.label() == self.category)
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.category == ALL
    }

    #[must_use]
    pub fn category_list(&self) -> Vec<(&'static str, bool)> {
        std::iter::once(ALL)
            .chain(Category::iter().map(|c| c.label()))
            .map(|label| (label, self.category == label))
            .collect()
    }
}

impl Default for MoveFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL.to_string(),
        }
    }
}
