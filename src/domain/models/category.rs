//! Category Domain Model
//!
//! A named grouping that classifies destinations.

use super::destination::Destination;

/// Newtype wrapper for Category ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(i32);

impl CategoryId {
    /// Create a CategoryId from a raw database identifier
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying integer
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for CategoryId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Data required to create a new Category
#[derive(Debug, Clone)]
pub struct CreateCategoryData {
    pub name: String,
}

/// Category domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    id: CategoryId,
    name: String,
}

impl Category {
    /// Restore a Category from persisted data
    #[must_use]
    pub fn restore(id: CategoryId, name: String) -> Self {
        Self { id, name }
    }

    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A category together with the destinations that reference it
#[derive(Debug, Clone)]
pub struct CategoryDetails {
    pub category: Category,
    pub destinations: Vec<Destination>,
}

impl CategoryDetails {
    /// Wrap a freshly created category, which cannot own destinations yet
    #[must_use]
    pub fn empty(category: Category) -> Self {
        Self {
            category,
            destinations: Vec::new(),
        }
    }
}
