//! Destination DTOs
//!
//! Data transfer objects for destination API endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::category::CategorySummaryDto;
use super::pagination::{default_limit, default_skip};
use super::review::ReviewResponseDto;
use super::{decimal_to_price, price_to_decimal};
use crate::domain::models::category::CategoryId;
use crate::domain::models::destination::{
    CreateDestinationData, Destination, DestinationDetails, DestinationFilter,
};
use crate::domain::models::pagination::Pagination;
use crate::shared::errors::ApiError;

/// DTO for creating a new destination
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDestinationDto {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_id: i32,
}

impl TryFrom<CreateDestinationDto> for CreateDestinationData {
    type Error = ApiError;

    fn try_from(dto: CreateDestinationDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: dto.name,
            description: dto.description,
            price: price_to_decimal("price", dto.price)?,
            category_id: CategoryId::new(dto.category_id),
        })
    }
}

/// Query parameters for listing destinations
///
/// Every filter is optional; a present filter applies even when it is zero or empty.
/// Pagination fields are inlined because urlencoded queries cannot flatten typed numbers.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ListDestinationsQuery {
    #[serde(default = "default_skip")]
    #[validate(range(min = 0, message = "skip must be at least 0"))]
    pub skip: i64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 0, message = "limit must be at least 0"))]
    pub limit: i64,

    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search: Option<String>,
    pub category_id: Option<i32>,
}

impl Default for ListDestinationsQuery {
    fn default() -> Self {
        Self {
            skip: default_skip(),
            limit: default_limit(),
            min_price: None,
            max_price: None,
            search: None,
            category_id: None,
        }
    }
}

impl TryFrom<ListDestinationsQuery> for DestinationFilter {
    type Error = ApiError;

    fn try_from(query: ListDestinationsQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            min_price: query
                .min_price
                .map(|v| price_to_decimal("min_price", v))
                .transpose()?,
            max_price: query
                .max_price
                .map(|v| price_to_decimal("max_price", v))
                .transpose()?,
            search: query.search,
            category_id: query.category_id.map(CategoryId::new),
            pagination: Pagination::new(query.skip, query.limit),
        })
    }
}

/// Destination as nested inside a category response
#[derive(Debug, Clone, Serialize)]
pub struct DestinationSummaryDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_id: i32,
}

impl From<Destination> for DestinationSummaryDto {
    fn from(destination: Destination) -> Self {
        Self {
            id: destination.id().value(),
            name: destination.name().to_string(),
            description: destination.description().to_string(),
            price: decimal_to_price(destination.price()),
            category_id: destination.category_id().value(),
        }
    }
}

/// Destination response DTO
#[derive(Debug, Clone, Serialize)]
pub struct DestinationResponseDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_id: i32,
    pub category: CategorySummaryDto,
    pub reviews: Vec<ReviewResponseDto>,
}

impl From<DestinationDetails> for DestinationResponseDto {
    fn from(details: DestinationDetails) -> Self {
        let destination = details.destination;
        Self {
            id: destination.id().value(),
            name: destination.name().to_string(),
            description: destination.description().to_string(),
            price: decimal_to_price(destination.price()),
            category_id: destination.category_id().value(),
            category: details.category.into(),
            reviews: details.reviews.into_iter().map(ReviewResponseDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::category::Category;
    use crate::domain::models::destination::DestinationId;
    use crate::domain::models::review::{Review, ReviewId};
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_dto_converts_price() {
        let dto: CreateDestinationDto = serde_json::from_str(
            r#"{"name": "Kyoto", "description": "Temples", "price": 149.99, "category_id": 2}"#,
        )
        .unwrap();

        let data = CreateDestinationData::try_from(dto).unwrap();

        assert_eq!(data.price, dec!(149.99));
        assert_eq!(data.category_id, CategoryId::new(2));
    }

    #[test]
    fn test_create_dto_requires_every_field() {
        let result = serde_json::from_str::<CreateDestinationDto>(
            r#"{"name": "Kyoto", "description": "Temples", "price": 149.99}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_query_without_filters_maps_to_defaults() {
        let filter = DestinationFilter::try_from(ListDestinationsQuery::default()).unwrap();

        assert!(filter.min_price.is_none());
        assert!(filter.max_price.is_none());
        assert!(filter.search.is_none());
        assert!(filter.category_id.is_none());
        assert_eq!(filter.pagination.limit(), 10);
    }

    #[test]
    fn test_query_keeps_zero_valued_filters() {
        let query = ListDestinationsQuery {
            min_price: Some(0.0),
            category_id: Some(0),
            search: Some(String::new()),
            ..Default::default()
        };

        let filter = DestinationFilter::try_from(query).unwrap();

        assert_eq!(filter.min_price, Some(dec!(0)));
        assert_eq!(filter.category_id, Some(CategoryId::new(0)));
        assert_eq!(filter.search.as_deref(), Some(""));
    }

    #[test]
    fn test_query_rejects_non_finite_price() {
        let query = ListDestinationsQuery {
            max_price: Some(f64::NAN),
            ..Default::default()
        };
        assert!(DestinationFilter::try_from(query).is_err());
    }

    #[test]
    fn test_query_validates_pagination() {
        let query = ListDestinationsQuery {
            skip: -1,
            ..Default::default()
        };
        assert!(query.validate().is_err());
        assert!(ListDestinationsQuery::default().validate().is_ok());
    }

    #[test]
    fn test_response_nests_category_and_reviews() {
        let details = DestinationDetails {
            destination: Destination::restore(
                DestinationId::new(5),
                "Kyoto".to_string(),
                "Temples".to_string(),
                dec!(149.99),
                CategoryId::new(2),
            ),
            category: Category::restore(CategoryId::new(2), "Culture".to_string()),
            reviews: vec![Review::restore(
                ReviewId::new(1),
                "Serene".to_string(),
                5,
                DestinationId::new(5),
            )],
        };

        let json = serde_json::to_value(DestinationResponseDto::from(details)).unwrap();

        assert_eq!(json["id"], 5);
        assert_eq!(json["category"]["name"], "Culture");
        assert_eq!(json["reviews"][0]["destination_id"], 5);
        assert!((json["price"].as_f64().unwrap() - 149.99).abs() < 1e-9);
    }
}
