//! List Categories Use Case
//!
//! Retrieves a page of categories, each with the destinations filed under it.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::gateways::{CategoryRepository, DestinationRepository};
use crate::domain::models::category::{CategoryDetails, CategoryId};
use crate::domain::models::destination::Destination;
use crate::domain::models::pagination::Pagination;
use crate::shared::errors::UseCaseError;

/// Use case for listing categories
pub struct ListCategoriesUseCase {
    category_repository: Arc<dyn CategoryRepository>,
    destination_repository: Arc<dyn DestinationRepository>,
}

impl ListCategoriesUseCase {
    /// Create a new ListCategoriesUseCase
    #[must_use]
    pub fn new(
        category_repository: Arc<dyn CategoryRepository>,
        destination_repository: Arc<dyn DestinationRepository>,
    ) -> Self {
        Self {
            category_repository,
            destination_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, pagination: Pagination) -> Result<Vec<CategoryDetails>, UseCaseError> {
        tracing::debug!(skip = pagination.skip(), limit = pagination.limit(), "Listing categories");

        let categories = self.category_repository.list(pagination).await?;
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<CategoryId> = categories.iter().map(|c| c.id()).collect();
        let mut by_category: HashMap<CategoryId, Vec<Destination>> = HashMap::new();
        for destination in self.destination_repository.find_by_category_ids(&ids).await? {
            by_category
                .entry(destination.category_id())
                .or_default()
                .push(destination);
        }

        let details: Vec<CategoryDetails> = categories
            .into_iter()
            .map(|category| CategoryDetails {
                destinations: by_category.remove(&category.id()).unwrap_or_default(),
                category,
            })
            .collect();

        tracing::debug!(count = details.len(), "Found categories");
        Ok(details)
    }
}
