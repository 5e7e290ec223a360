//! Category persistence adapters.

mod postgres;

pub use postgres::PostgresCategoryRepository;
