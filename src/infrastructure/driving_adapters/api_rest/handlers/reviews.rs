//! Review Handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use crate::infrastructure::driving_adapters::api_rest::dto::{
    CreateReviewDto, ReviewResponseDto, ReviewTargetQuery,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for review endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_review))
}

/// POST /reviews?destination_id={id} - Review a destination
///
/// # Responses
///
/// * 201 Created - Review stored
/// * 400 Bad Request - Missing or non-integer destination_id
/// * 404 Not Found - Destination does not exist
#[axum::debug_handler]
async fn create_review(
    State(state): State<AppState>,
    Query(target): Query<ReviewTargetQuery>,
    Json(dto): Json<CreateReviewDto>,
) -> Result<(StatusCode, Json<ReviewResponseDto>), ApiError> {
    let review = state
        .create_review_use_case
        .execute(dto.into_data(target))
        .await?;

    Ok((StatusCode::CREATED, Json(ReviewResponseDto::from(review))))
}
