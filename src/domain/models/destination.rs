//! Destination Domain Model
//!
//! A travel location with a price, belonging to exactly one category.

use rust_decimal::Decimal;

use super::category::{Category, CategoryId};
use super::pagination::Pagination;
use super::review::Review;

/// Newtype wrapper for Destination ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DestinationId(i32);

impl DestinationId {
    /// Create a DestinationId from a raw database identifier
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

impl std::fmt::Display for DestinationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for DestinationId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Data required to create a new Destination
#[derive(Debug, Clone)]
pub struct CreateDestinationData {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: CategoryId,
}

/// Destination domain entity
///
/// Holds its parent category by id only; nested views are assembled at query time.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    id: DestinationId,
    name: String,
    description: String,
    price: Decimal,
    category_id: CategoryId,
}

impl Destination {
    /// Restore a Destination from persisted data
    #[must_use]
    pub fn restore(
        id: DestinationId,
        name: String,
        description: String,
        price: Decimal,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            category_id,
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> DestinationId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    #[must_use]
    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }
}

/// A destination joined with its category and reviews
#[derive(Debug, Clone)]
pub struct DestinationDetails {
    pub destination: Destination,
    pub category: Category,
    pub reviews: Vec<Review>,
}

/// Optional, conjunctive filters for listing destinations
///
/// A filter applies whenever it is present, including zero prices and empty searches.
#[derive(Debug, Clone, Default)]
pub struct DestinationFilter {
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub search: Option<String>,
    pub category_id: Option<CategoryId>,
    pub pagination: Pagination,
}

impl DestinationFilter {
    /// Whether a destination satisfies every present filter (pagination aside)
    #[must_use]
    pub fn matches(&self, destination: &Destination) -> bool {
        self.min_price.map_or(true, |min| destination.price() >= min)
            && self.max_price.map_or(true, |max| destination.price() <= max)
            && self
                .search
                .as_deref()
                .map_or(true, |needle| destination.name().contains(needle))
            && self
                .category_id
                .map_or(true, |id| destination.category_id() == id)
    }
}
