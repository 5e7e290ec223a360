//! Create Destination Use Case
//!
//! Creates a new destination filed under an existing category.

use std::sync::Arc;

use crate::domain::gateways::{CategoryRepository, DestinationRepository};
use crate::domain::models::destination::{CreateDestinationData, DestinationDetails};
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Use case for creating a new destination
pub struct CreateDestinationUseCase {
    destination_repository: Arc<dyn DestinationRepository>,
    category_repository: Arc<dyn CategoryRepository>,
}

impl CreateDestinationUseCase {
    /// Create a new CreateDestinationUseCase
    #[must_use]
    pub fn new(
        destination_repository: Arc<dyn DestinationRepository>,
        category_repository: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            destination_repository,
            category_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the referenced category does not exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateDestinationData) -> Result<DestinationDetails, UseCaseError> {
        tracing::info!(
            name = %data.name,
            category_id = %data.category_id,
            "Creating new destination"
        );

        let category_id = data.category_id;
        let Some(category) = self.category_repository.find_by_id(category_id).await? else {
            tracing::warn!(category_id = %category_id, "Referenced category does not exist");
            return Err(UseCaseError::not_found("Category", category_id));
        };

        let created = self
            .destination_repository
            .create(&data)
            .await
            .map_err(|e| match e {
                RepositoryError::ForeignKeyViolation(_) => UseCaseError::not_found("Category", category_id),
                other => other.into(),
            })?;

        tracing::info!(destination_id = %created.id(), "Destination created successfully");

        Ok(DestinationDetails {
            destination: created,
            category,
            reviews: Vec::new(),
        })
    }
}
