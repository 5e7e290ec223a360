//! Destination Handlers
//!
//! HTTP handlers for creating and searching destinations.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::domain::models::destination::{CreateDestinationData, DestinationFilter};
use crate::infrastructure::driving_adapters::api_rest::dto::{
    CreateDestinationDto, DestinationResponseDto, ListDestinationsQuery,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for destination endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_destinations).post(create_destination))
}

/// POST /destinations - Create a new destination
///
/// # Responses
///
/// * 201 Created - Destination created, with its category and no reviews
/// * 400 Bad Request - Price cannot be stored as a decimal
/// * 404 Not Found - Referenced category does not exist
#[axum::debug_handler]
async fn create_destination(
    State(state): State<AppState>,
    Json(dto): Json<CreateDestinationDto>,
) -> Result<(StatusCode, Json<DestinationResponseDto>), ApiError> {
    let destination = state
        .create_destination_use_case
        .execute(CreateDestinationData::try_from(dto)?)
        .await?;

    Ok((StatusCode::CREATED, Json(DestinationResponseDto::from(destination))))
}

/// GET /destinations - List destinations
///
/// Supports `skip`, `limit`, `min_price`, `max_price`, `search` and `category_id`.
///
/// # Responses
///
/// * 200 OK - Matching destinations with their category and reviews
/// * 400 Bad Request - Negative pagination or unrepresentable price bound
#[axum::debug_handler]
async fn list_destinations(
    State(state): State<AppState>,
    Query(query): Query<ListDestinationsQuery>,
) -> Result<Json<Vec<DestinationResponseDto>>, ApiError> {
    query.validate()?;

    let destinations = state
        .list_destinations_use_case
        .execute(DestinationFilter::try_from(query)?)
        .await?;

    let response: Vec<DestinationResponseDto> =
        destinations.into_iter().map(DestinationResponseDto::from).collect();
    Ok(Json(response))
}
