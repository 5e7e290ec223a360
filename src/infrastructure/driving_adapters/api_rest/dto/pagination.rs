//! Pagination query parameters.

use serde::Deserialize;
use validator::Validate;

use crate::domain::models::pagination::{Pagination, DEFAULT_LIMIT, DEFAULT_SKIP};

pub(super) fn default_skip() -> i64 {
    DEFAULT_SKIP
}

pub(super) fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// `?skip=&limit=` query parameters
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationQuery {
    #[serde(default = "default_skip")]
    #[validate(range(min = 0, message = "skip must be at least 0"))]
    pub skip: i64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 0, message = "limit must be at least 0"))]
    pub limit: i64,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl From<PaginationQuery> for Pagination {
    fn from(query: PaginationQuery) -> Self {
        Pagination::new(query.skip, query.limit)
    }
}
