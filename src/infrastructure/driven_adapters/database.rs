//! Database Connection Management
//!
//! Pool construction and idempotent schema bootstrap.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::config::DatabaseConfig;

/// DDL applied at startup; every statement is a no-op once the schema exists
const SCHEMA: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS categories (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        CONSTRAINT categories_name_key UNIQUE (name)
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS destinations (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        price NUMERIC NOT NULL,
        category_id INTEGER NOT NULL,
        CONSTRAINT destinations_category_id_fkey
            FOREIGN KEY (category_id) REFERENCES categories (id)
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS reviews (
        id SERIAL PRIMARY KEY,
        content TEXT NOT NULL,
        rating INTEGER NOT NULL,
        destination_id INTEGER NOT NULL,
        CONSTRAINT reviews_destination_id_fkey
            FOREIGN KEY (destination_id) REFERENCES destinations (id)
    )
    ",
    "CREATE INDEX IF NOT EXISTS ix_destinations_name ON destinations (name)",
    "CREATE INDEX IF NOT EXISTS ix_destinations_price ON destinations (price)",
    "CREATE INDEX IF NOT EXISTS ix_destinations_category_id ON destinations (category_id)",
    "CREATE INDEX IF NOT EXISTS ix_reviews_destination_id ON reviews (destination_id)",
];

/// Create a PostgreSQL connection pool from configuration
///
/// # Errors
///
/// Returns `sqlx::Error` if the database cannot be reached.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.url)
        .await
}

/// Create the tables and indexes if they are absent
///
/// # Errors
///
/// Returns `sqlx::Error` if any DDL statement fails.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    for statement in SCHEMA {
        sqlx::query(statement).execute(&mut *conn).await?;
    }
    Ok(())
}
