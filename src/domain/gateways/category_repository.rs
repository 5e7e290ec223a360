//! Category Repository Gateway
//!
//! Abstract trait defining the contract for category persistence operations.

use async_trait::async_trait;

use crate::domain::models::category::{Category, CategoryId, CreateCategoryData};
use crate::domain::models::pagination::Pagination;
use crate::shared::errors::RepositoryError;

/// Repository trait for Category persistence operations
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find a category by its ID
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError>;

    /// Find every category whose ID is in `ids`, in insertion order
    async fn find_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<Category>, RepositoryError>;

    /// List a page of categories in insertion order
    async fn list(&self, pagination: Pagination) -> Result<Vec<Category>, RepositoryError>;

    /// Persist a new category, returning it with its assigned ID
    async fn create(&self, data: &CreateCategoryData) -> Result<Category, RepositoryError>;

    /// Check whether a category with this exact name exists
    async fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError>;
}
