//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod category;
pub mod destination;
pub mod pagination;
pub mod review;

pub use category::{Category, CategoryDetails, CategoryId, CreateCategoryData};
pub use destination::{
    CreateDestinationData, Destination, DestinationDetails, DestinationFilter, DestinationId,
};
pub use pagination::Pagination;
pub use review::{CreateReviewData, Review, ReviewId};
