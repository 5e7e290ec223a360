//! PostgreSQL Review Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::ReviewRepository;
use crate::domain::models::destination::DestinationId;
use crate::domain::models::review::{CreateReviewData, Review, ReviewId};
use crate::shared::errors::RepositoryError;

/// Database row representation for reviews table
#[derive(Debug, sqlx::FromRow)]
struct ReviewRow {
    id: i32,
    content: String,
    rating: i32,
    destination_id: i32,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review::restore(
            ReviewId::new(row.id),
            row.content,
            row.rating,
            DestinationId::new(row.destination_id),
        )
    }
}

/// PostgreSQL implementation of ReviewRepository
pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    /// Create a new PostgresReviewRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn find_by_destination_ids(
        &self,
        destination_ids: &[DestinationId],
    ) -> Result<Vec<Review>, RepositoryError> {
        let raw_ids: Vec<i32> = destination_ids.iter().map(|id| id.value()).collect();

        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, content, rating, destination_id
            FROM reviews
            WHERE destination_id = ANY($1)
            ORDER BY id ASC
            "#,
        )
        .bind(raw_ids)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn create(&self, data: &CreateReviewData) -> Result<Review, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            INSERT INTO reviews (content, rating, destination_id)
            VALUES ($1, $2, $3)
            RETURNING id, content, rating, destination_id
            "#,
        )
        .bind(&data.content)
        .bind(data.rating)
        .bind(data.destination_id.value())
        .fetch_one(&mut *conn)
        .await?;

        Ok(Review::from(row))
    }
}
