//! Destination persistence adapters.

mod postgres;

pub use postgres::PostgresDestinationRepository;
