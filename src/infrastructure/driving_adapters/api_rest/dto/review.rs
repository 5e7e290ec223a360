//! Review DTOs

use serde::{Deserialize, Serialize};

use crate::domain::models::destination::DestinationId;
use crate::domain::models::review::{CreateReviewData, Review};

/// DTO for creating a new review; the target destination travels in the query string
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewDto {
    pub content: String,
    pub rating: i32,
}

/// `?destination_id=` query parameter
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewTargetQuery {
    pub destination_id: i32,
}

impl CreateReviewDto {
    /// Combine the body with the destination named in the query string
    #[must_use]
    pub fn into_data(self, target: ReviewTargetQuery) -> CreateReviewData {
        CreateReviewData {
            content: self.content,
            rating: self.rating,
            destination_id: DestinationId::new(target.destination_id),
        }
    }
}

/// Review response DTO
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponseDto {
    pub id: i32,
    pub content: String,
    pub rating: i32,
    pub destination_id: i32,
}

impl From<Review> for ReviewResponseDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id().value(),
            content: review.content().to_string(),
            rating: review.rating(),
            destination_id: review.destination_id().value(),
        }
    }
}
