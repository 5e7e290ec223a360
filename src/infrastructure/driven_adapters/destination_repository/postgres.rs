//! PostgreSQL Destination Repository Implementation
//!
//! Implements the DestinationRepository trait using SQLx for PostgreSQL.
//! Listing composes its WHERE clause from whichever filters are present.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::gateways::DestinationRepository;
use crate::domain::models::category::CategoryId;
use crate::domain::models::destination::{
    CreateDestinationData, Destination, DestinationFilter, DestinationId,
};
use crate::shared::errors::RepositoryError;

/// Database row representation for destinations table
#[derive(Debug, sqlx::FromRow)]
struct DestinationRow {
    id: i32,
    name: String,
    description: String,
    price: Decimal,
    category_id: i32,
}

impl From<DestinationRow> for Destination {
    fn from(row: DestinationRow) -> Self {
        Destination::restore(
            DestinationId::new(row.id),
            row.name,
            row.description,
            row.price,
            CategoryId::new(row.category_id),
        )
    }
}

/// Build the filtered, paginated listing query
fn list_query(filter: &DestinationFilter) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new(
        "SELECT id, name, description, price, category_id FROM destinations WHERE TRUE",
    );

    if let Some(min_price) = filter.min_price {
        builder.push(" AND price >= ").push_bind(min_price);
    }
    if let Some(max_price) = filter.max_price {
        builder.push(" AND price <= ").push_bind(max_price);
    }
    // strpos keeps `%` and `_` in the search term literal
    if let Some(search) = filter.search.as_deref() {
        builder.push(" AND strpos(name, ").push_bind(search).push(") > 0");
    }
    if let Some(category_id) = filter.category_id {
        builder.push(" AND category_id = ").push_bind(category_id.value());
    }

    builder
        .push(" ORDER BY id ASC OFFSET ")
        .push_bind(filter.pagination.skip())
        .push(" LIMIT ")
        .push_bind(filter.pagination.limit());

    builder
}

/// PostgreSQL implementation of DestinationRepository
pub struct PostgresDestinationRepository {
    pool: PgPool,
}

impl PostgresDestinationRepository {
    /// Create a new PostgresDestinationRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DestinationRepository for PostgresDestinationRepository {
    async fn find_by_id(&self, id: DestinationId) -> Result<Option<Destination>, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, DestinationRow>(
            r#"
            SELECT id, name, description, price, category_id
            FROM destinations
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(Destination::from))
    }

    async fn list(&self, filter: &DestinationFilter) -> Result<Vec<Destination>, RepositoryError> {
        let mut builder = list_query(filter);

        let mut conn = self.pool.acquire().await?;
        let rows = builder
            .build_query_as::<DestinationRow>()
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows.into_iter().map(Destination::from).collect())
    }

    async fn find_by_category_ids(
        &self,
        category_ids: &[CategoryId],
    ) -> Result<Vec<Destination>, RepositoryError> {
        let raw_ids: Vec<i32> = category_ids.iter().map(|id| id.value()).collect();

        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, DestinationRow>(
            r#"
            SELECT id, name, description, price, category_id
            FROM destinations
            WHERE category_id = ANY($1)
            ORDER BY id ASC
            "#,
        )
        .bind(raw_ids)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(Destination::from).collect())
    }

    async fn create(&self, data: &CreateDestinationData) -> Result<Destination, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, DestinationRow>(
            r#"
            INSERT INTO destinations (name, description, price, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price, category_id
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.category_id.value())
        .fetch_one(&mut *conn)
        .await?;

        Ok(Destination::from(row))
    }
}
