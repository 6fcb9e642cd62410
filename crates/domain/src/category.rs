use std::{fmt, slice::Iter, str::FromStr};

use serde::Serialize;

/// The category label matched by every move, used as the filter sentinel.
pub const ALL: &str = "All";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize)]
pub enum Category {
    Legs,
    Arms,
    Core,
}

impl Category {
    pub fn iter() -> Iter<'static, Category> {
        static CATEGORIES: [Category; 3] = [Category::Legs, Category::Arms, Category::Core];
        CATEGORIES.iter()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Legs => "Legs",
            Category::Arms => "Arms",
            Category::Core => "Core",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::iter()
            .find(|c| c.label() == s)
            .copied()
            .ok_or_else(|| CategoryError::Unknown(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CategoryError {
    #[error("Unknown category: {0}")]
    Unknown(String),
}
