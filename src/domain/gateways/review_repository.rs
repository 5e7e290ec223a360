//! Review Repository Gateway

use async_trait::async_trait;

use crate::domain::models::destination::DestinationId;
use crate::domain::models::review::{CreateReviewData, Review};
use crate::shared::errors::RepositoryError;

/// Repository trait for Review persistence operations
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find all reviews attached to any of the given destinations, in insertion order
    async fn find_by_destination_ids(
        &self,
        destination_ids: &[DestinationId],
    ) -> Result<Vec<Review>, RepositoryError>;

    /// Persist a new review, returning it with its assigned ID
    async fn create(&self, data: &CreateReviewData) -> Result<Review, RepositoryError>;
}
