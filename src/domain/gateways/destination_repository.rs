//! Destination Repository Gateway

use async_trait::async_trait;

use crate::domain::models::category::CategoryId;
use crate::domain::models::destination::{
    CreateDestinationData, Destination, DestinationFilter, DestinationId,
};
use crate::shared::errors::RepositoryError;

/// Repository trait for Destination persistence operations
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    /// Find a destination by its ID
    async fn find_by_id(&self, id: DestinationId) -> Result<Option<Destination>, RepositoryError>;

    /// List destinations matching every present filter, paginated, in insertion order
    async fn list(&self, filter: &DestinationFilter) -> Result<Vec<Destination>, RepositoryError>;

    /// Find all destinations belonging to any of the given categories, in insertion order
    async fn find_by_category_ids(
        &self,
        category_ids: &[CategoryId],
    ) -> Result<Vec<Destination>, RepositoryError>;

    /// Persist a new destination, returning it with its assigned ID
    async fn create(&self, data: &CreateDestinationData) -> Result<Destination, RepositoryError>;
}
