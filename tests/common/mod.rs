//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a PostgreSQL container,
//! bootstrapping the schema, and driving the real application router.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use travel_destinations_api::infrastructure::driven_adapters::database;
use travel_destinations_api::infrastructure::driving_adapters::api_rest::{app_router, AppState};

/// Test application context
pub struct TestApp {
    pub pool: PgPool,
    state: AppState,
    _container: ContainerAsync<Postgres>,
}

/// Status, headers and parsed body of one response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// Deserialize the body into a typed response
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_value(self.body.clone()).expect("Response body has unexpected shape")
    }
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        database::ensure_schema(&pool)
            .await
            .expect("Failed to create schema");

        let state = AppState::from_pool(pool.clone());

        Self {
            pool,
            state,
            _container: container,
        }
    }

    /// Send a request through the full router, trailing-slash normalization included
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_string(&value).unwrap())
            }
            None => Body::empty(),
        };

        let response = app_router(self.state.clone())
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    /// Create a category through the API and return its id
    pub async fn create_category(&self, name: &str) -> i32 {
        let response = self.post("/categories/", json!({ "name": name })).await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.json::<CategoryResponse>().id
    }

    /// Create a destination through the API and return its id
    pub async fn create_destination(&self, name: &str, price: f64, category_id: i32) -> i32 {
        let response = self
            .post(
                "/destinations/",
                json!({
                    "name": name,
                    "description": format!("Visit {name}"),
                    "price": price,
                    "category_id": category_id,
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.json::<DestinationResponse>().id
    }

    /// Count rows in one of the application tables
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}

/// Category response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub destinations: Vec<DestinationSummaryResponse>,
}

#[derive(Debug, Deserialize)]
pub struct CategorySummaryResponse {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DestinationSummaryResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_id: i32,
}

/// Destination response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct DestinationResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_id: i32,
    pub category: CategorySummaryResponse,
    pub reviews: Vec<ReviewResponse>,
}

/// Review response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct ReviewResponse {
    pub id: i32,
    pub content: String,
    pub rating: i32,
    pub destination_id: i32,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Names of a destination listing, in response order
pub fn destination_names(destinations: &[DestinationResponse]) -> Vec<String> {
    destinations.iter().map(|d| d.name.clone()).collect()
}
