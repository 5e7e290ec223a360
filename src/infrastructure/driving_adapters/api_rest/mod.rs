//! REST API Module
//!
//! Contains HTTP handlers, DTOs, middleware and the application router.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{
    CreateCategoryUseCase, CreateDestinationUseCase, CreateReviewUseCase, ListCategoriesUseCase,
    ListDestinationsUseCase,
};
use crate::infrastructure::driven_adapters::{
    PostgresCategoryRepository, PostgresDestinationRepository, PostgresReviewRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub create_category_use_case: Arc<CreateCategoryUseCase>,
    pub list_categories_use_case: Arc<ListCategoriesUseCase>,
    pub create_destination_use_case: Arc<CreateDestinationUseCase>,
    pub list_destinations_use_case: Arc<ListDestinationsUseCase>,
    pub create_review_use_case: Arc<CreateReviewUseCase>,
}

impl AppState {
    /// Wire the PostgreSQL repositories and every use case onto one pool
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        let category_repository = Arc::new(PostgresCategoryRepository::new(pool.clone()));
        let destination_repository = Arc::new(PostgresDestinationRepository::new(pool.clone()));
        let review_repository = Arc::new(PostgresReviewRepository::new(pool));

        Self {
            create_category_use_case: Arc::new(CreateCategoryUseCase::new(category_repository.clone())),
            list_categories_use_case: Arc::new(ListCategoriesUseCase::new(
                category_repository.clone(),
                destination_repository.clone(),
            )),
            create_destination_use_case: Arc::new(CreateDestinationUseCase::new(
                destination_repository.clone(),
                category_repository.clone(),
            )),
            list_destinations_use_case: Arc::new(ListDestinationsUseCase::new(
                destination_repository.clone(),
                category_repository,
                review_repository.clone(),
            )),
            create_review_use_case: Arc::new(CreateReviewUseCase::new(
                review_repository,
                destination_repository,
            )),
        }
    }
}

/// Build the routes without path normalization
pub fn routes(state: AppState) -> Router {
    Router::new()
        .nest("/categories", handlers::categories::router())
        .nest("/destinations", handlers::destinations::router())
        .nest("/reviews", handlers::reviews::router())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Build the full application; `/destinations/` and `/destinations` reach the same handler
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(routes(state))
}
