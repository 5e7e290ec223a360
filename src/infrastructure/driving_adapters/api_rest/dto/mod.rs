//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API. Create shapes, domain entities
//! and response shapes are deliberately distinct types.

pub mod category;
pub mod destination;
pub mod pagination;
pub mod review;

pub use category::{CategoryResponseDto, CategorySummaryDto, CreateCategoryDto};
pub use destination::{
    CreateDestinationDto, DestinationResponseDto, DestinationSummaryDto, ListDestinationsQuery,
};
pub use pagination::PaginationQuery;
pub use review::{CreateReviewDto, ReviewResponseDto, ReviewTargetQuery};

use rust_decimal::Decimal;

use crate::shared::errors::ApiError;

/// Convert a wire price into an exact decimal
fn price_to_decimal(field: &str, value: f64) -> Result<Decimal, ApiError> {
    if !value.is_finite() {
        return Err(ApiError::BadRequest(format!("{field} must be a finite number")));
    }
    Decimal::try_from(value)
        .map_err(|_| ApiError::BadRequest(format!("{field} cannot be represented as a decimal")))
}

/// Convert a stored price back to its wire form
fn decimal_to_price(value: Decimal) -> f64 {
    value.try_into().unwrap_or(0.0)
}
