//! Create Category Use Case
//!
//! Creates a new uniquely named category.

use std::sync::Arc;

use crate::domain::gateways::CategoryRepository;
use crate::domain::models::category::{CategoryDetails, CreateCategoryData};
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Use case for creating a new category
pub struct CreateCategoryUseCase {
    category_repository: Arc<dyn CategoryRepository>,
}

impl CreateCategoryUseCase {
    /// Create a new CreateCategoryUseCase
    #[must_use]
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Conflict` if a category with the same name already exists.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateCategoryData) -> Result<CategoryDetails, UseCaseError> {
        tracing::info!(name = %data.name, "Creating new category");

        if self.category_repository.exists_by_name(&data.name).await? {
            tracing::warn!(name = %data.name, "Category name already taken");
            return Err(duplicate_name(&data.name));
        }

        // A concurrent insert can still win the race; the unique index settles it
        let created = self
            .category_repository
            .create(&data)
            .await
            .map_err(|e| match e {
                RepositoryError::UniqueViolation(_) => duplicate_name(&data.name),
                other => other.into(),
            })?;

        tracing::info!(category_id = %created.id(), "Category created successfully");

        Ok(CategoryDetails::empty(created))
    }
}

fn duplicate_name(name: &str) -> UseCaseError {
    UseCaseError::Conflict(format!("Category with name '{name}' already exists"))
}
