//! Review Domain Model
//!
//! User-submitted content and rating attached to one destination.

use super::destination::DestinationId;

/// Newtype wrapper for Review ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewId(i32);

impl ReviewId {
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data required to create a new Review
///
/// `rating` carries no range constraint.
#[derive(Debug, Clone)]
pub struct CreateReviewData {
    pub content: String,
    pub rating: i32,
    pub destination_id: DestinationId,
}

/// Review domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    id: ReviewId,
    content: String,
    rating: i32,
    destination_id: DestinationId,
}

impl Review {
    /// Restore a Review from persisted data
    #[must_use]
    pub fn restore(id: ReviewId, content: String, rating: i32, destination_id: DestinationId) -> Self {
        Self {
            id,
            content,
            rating,
            destination_id,
        }
    }

    #[must_use]
    pub fn id(&self) -> ReviewId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn rating(&self) -> i32 {
        self.rating
    }

    #[must_use]
    pub fn destination_id(&self) -> DestinationId {
        self.destination_id
    }
}
