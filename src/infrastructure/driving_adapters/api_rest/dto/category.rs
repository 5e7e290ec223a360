//! Category DTOs

use serde::{Deserialize, Serialize};

use super::destination::DestinationSummaryDto;
use crate::domain::models::category::{Category, CategoryDetails, CreateCategoryData};

/// DTO for creating a new category
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryDto {
    pub name: String,
}

impl From<CreateCategoryDto> for CreateCategoryData {
    fn from(dto: CreateCategoryDto) -> Self {
        Self { name: dto.name }
    }
}

/// Category as nested inside a destination response
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummaryDto {
    pub id: i32,
    pub name: String,
}

impl From<Category> for CategorySummaryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id().value(),
            name: category.name().to_string(),
        }
    }
}

/// Category response DTO
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponseDto {
    pub id: i32,
    pub name: String,
    pub destinations: Vec<DestinationSummaryDto>,
}

impl From<CategoryDetails> for CategoryResponseDto {
    fn from(details: CategoryDetails) -> Self {
        Self {
            id: details.category.id().value(),
            name: details.category.name().to_string(),
            destinations: details
                .destinations
                .into_iter()
                .map(DestinationSummaryDto::from)
                .collect(),
        }
    }
}
