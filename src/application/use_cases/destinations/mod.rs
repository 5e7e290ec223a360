//! Destination Use Cases

mod create_destination;
mod list_destinations;

pub use create_destination::CreateDestinationUseCase;
pub use list_destinations::ListDestinationsUseCase;
