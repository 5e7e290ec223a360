//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod category_repository;
pub mod destination_repository;
pub mod review_repository;

pub use category_repository::CategoryRepository;
pub use destination_repository::DestinationRepository;
pub use review_repository::ReviewRepository;
