//! Create Review Use Case
//!
//! Attaches a new review to an existing destination.

use std::sync::Arc;

use crate::domain::gateways::{DestinationRepository, ReviewRepository};
use crate::domain::models::review::{CreateReviewData, Review};
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Use case for creating a new review
pub struct CreateReviewUseCase {
    review_repository: Arc<dyn ReviewRepository>,
    destination_repository: Arc<dyn DestinationRepository>,
}

impl CreateReviewUseCase {
    /// Create a new CreateReviewUseCase
    #[must_use]
    pub fn new(
        review_repository: Arc<dyn ReviewRepository>,
        destination_repository: Arc<dyn DestinationRepository>,
    ) -> Self {
        Self {
            review_repository,
            destination_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the destination does not exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateReviewData) -> Result<Review, UseCaseError> {
        let destination_id = data.destination_id;
        tracing::info!(destination_id = %destination_id, rating = data.rating, "Creating new review");

        if self.destination_repository.find_by_id(destination_id).await?.is_none() {
            tracing::warn!(destination_id = %destination_id, "Referenced destination does not exist");
            return Err(UseCaseError::not_found("Destination", destination_id));
        }

        let created = self
            .review_repository
            .create(&data)
            .await
            .map_err(|e| match e {
                RepositoryError::ForeignKeyViolation(_) => {
                    UseCaseError::not_found("Destination", destination_id)
                }
                other => other.into(),
            })?;

        tracing::info!(review_id = %created.id(), "Review created successfully");

        Ok(created)
    }
}
