//! Offset/limit pagination window.

/// Default number of rows skipped
pub const DEFAULT_SKIP: i64 = 0;

/// Default page size
pub const DEFAULT_LIMIT: i64 = 10;

/// Offset-based page window applied after filtering, in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    skip: i64,
    limit: i64,
}

impl Pagination {
    /// Create a window; negative inputs are clamped to zero
    #[must_use]
    pub fn new(skip: i64, limit: i64) -> Self {
        Self {
            skip: skip.max(0),
            limit: limit.max(0),
        }
    }

    #[must_use]
    pub fn skip(&self) -> i64 {
        self.skip
    }

    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_SKIP, DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = Pagination::default();
        assert_eq!(page.skip(), 0);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn test_negative_values_are_clamped() {
        let page = Pagination::new(-3, -1);
        assert_eq!(page.skip(), 0);
        assert_eq!(page.limit(), 0);
    }
}
