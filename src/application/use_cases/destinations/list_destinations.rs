//! List Destinations Use Case
//!
//! Filters and pages destinations, then joins each one with its category and reviews.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::gateways::{CategoryRepository, DestinationRepository, ReviewRepository};
use crate::domain::models::category::{Category, CategoryId};
use crate::domain::models::destination::{DestinationDetails, DestinationFilter, DestinationId};
use crate::domain::models::review::Review;
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Use case for listing destinations
pub struct ListDestinationsUseCase {
    destination_repository: Arc<dyn DestinationRepository>,
    category_repository: Arc<dyn CategoryRepository>,
    review_repository: Arc<dyn ReviewRepository>,
}

impl ListDestinationsUseCase {
    /// Create a new ListDestinationsUseCase
    #[must_use]
    pub fn new(
        destination_repository: Arc<dyn DestinationRepository>,
        category_repository: Arc<dyn CategoryRepository>,
        review_repository: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            destination_repository,
            category_repository,
            review_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error, or if a
    /// destination points at a category that cannot be loaded.
    pub async fn execute(&self, filter: DestinationFilter) -> Result<Vec<DestinationDetails>, UseCaseError> {
        tracing::debug!(?filter, "Listing destinations");

        let destinations = self.destination_repository.list(&filter).await?;
        if destinations.is_empty() {
            return Ok(Vec::new());
        }

        let mut category_ids: Vec<CategoryId> = destinations.iter().map(|d| d.category_id()).collect();
        category_ids.sort_unstable();
        category_ids.dedup();
        let categories: HashMap<CategoryId, Category> = self
            .category_repository
            .find_by_ids(&category_ids)
            .await?
            .into_iter()
            .map(|c| (c.id(), c))
            .collect();

        let destination_ids: Vec<DestinationId> = destinations.iter().map(|d| d.id()).collect();
        let mut reviews: HashMap<DestinationId, Vec<Review>> = HashMap::new();
        for review in self
            .review_repository
            .find_by_destination_ids(&destination_ids)
            .await?
        {
            reviews.entry(review.destination_id()).or_default().push(review);
        }

        let details = destinations
            .into_iter()
            .map(|destination| -> Result<DestinationDetails, RepositoryError> {
                let category = categories.get(&destination.category_id()).cloned().ok_or_else(|| {
                    RepositoryError::Mapping(format!(
                        "destination {} references missing category {}",
                        destination.id(),
                        destination.category_id()
                    ))
                })?;
                Ok(DestinationDetails {
                    reviews: reviews.remove(&destination.id()).unwrap_or_default(),
                    category,
                    destination,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = details.len(), "Found destinations");
        Ok(details)
    }
}
