//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{CategoryRepository, DestinationRepository, ReviewRepository};
pub use models::{
    Category, CategoryDetails, CategoryId, CreateCategoryData, CreateDestinationData,
    CreateReviewData, Destination, DestinationDetails, DestinationFilter, DestinationId,
    Pagination, Review, ReviewId,
};
