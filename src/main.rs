//! Travel Destinations API - Main Entry Point

use axum::extract::Request;
use axum::ServiceExt;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use travel_destinations_api::infrastructure::driven_adapters::config::AppConfig;
use travel_destinations_api::infrastructure::driven_adapters::database;
use travel_destinations_api::infrastructure::driving_adapters::api_rest::{app_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travel_destinations_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Create tables if absent
    database::ensure_schema(&pool).await?;
    tracing::info!("Database schema ready");

    // Build router
    let app = app_router(AppState::from_pool(pool));

    // Start server
    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
