//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod categories;
pub mod destinations;
pub mod reviews;

#[cfg(test)]
pub(crate) mod test_support;

pub use categories::{CreateCategoryUseCase, ListCategoriesUseCase};
pub use destinations::{CreateDestinationUseCase, ListDestinationsUseCase};
pub use reviews::CreateReviewUseCase;
