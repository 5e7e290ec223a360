//! Review persistence adapters.

mod postgres;

pub use postgres::PostgresReviewRepository;
