//! Category Handlers
//!
//! HTTP handlers for creating and listing categories.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::{
    CategoryResponseDto, CreateCategoryDto, PaginationQuery,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for category endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_categories).post(create_category))
}

/// POST /categories - Create a new category
///
/// # Responses
///
/// * 201 Created - Category created successfully
/// * 409 Conflict - A category with the same name already exists
#[axum::debug_handler]
async fn create_category(
    State(state): State<AppState>,
    Json(dto): Json<CreateCategoryDto>,
) -> Result<(StatusCode, Json<CategoryResponseDto>), ApiError> {
    let category = state.create_category_use_case.execute(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(CategoryResponseDto::from(category))))
}

/// GET /categories - List categories with their destinations
///
/// # Responses
///
/// * 200 OK - Page of categories in insertion order
/// * 400 Bad Request - Negative skip or limit
#[axum::debug_handler]
async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Vec<CategoryResponseDto>>, ApiError> {
    query.validate()?;

    let categories = state.list_categories_use_case.execute(query.into()).await?;

    let response: Vec<CategoryResponseDto> = categories.into_iter().map(CategoryResponseDto::from).collect();
    Ok(Json(response))
}
