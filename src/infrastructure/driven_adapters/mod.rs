//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration
//! - Connection pool and schema bootstrap

pub mod category_repository;
pub mod config;
pub mod database;
pub mod destination_repository;
pub mod review_repository;

pub use category_repository::PostgresCategoryRepository;
pub use config::AppConfig;
pub use destination_repository::PostgresDestinationRepository;
pub use review_repository::PostgresReviewRepository;
