//! PostgreSQL Category Repository Implementation
//!
//! Implements the CategoryRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::CategoryRepository;
use crate::domain::models::category::{Category, CategoryId, CreateCategoryData};
use crate::domain::models::pagination::Pagination;
use crate::shared::errors::RepositoryError;

/// Database row representation for categories table
#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: i32,
    name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category::restore(CategoryId::new(row.id), row.name)
    }
}

/// PostgreSQL implementation of CategoryRepository
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    /// Create a new PostgresCategoryRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(Category::from))
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<Category>, RepositoryError> {
        let raw_ids: Vec<i32> = ids.iter().map(|id| id.value()).collect();

        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name
            FROM categories
            WHERE id = ANY($1)
            ORDER BY id ASC
            "#,
        )
        .bind(raw_ids)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn list(&self, pagination: Pagination) -> Result<Vec<Category>, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name
            FROM categories
            ORDER BY id ASC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(pagination.skip())
        .bind(pagination.limit())
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn create(&self, data: &CreateCategoryData) -> Result<Category, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(&data.name)
        .fetch_one(&mut *conn)
        .await?;

        Ok(Category::from(row))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM categories WHERE name = $1
            )
            "#,
        )
        .bind(name)
        .fetch_one(&mut *conn)
        .await?;

        Ok(exists)
    }
}
