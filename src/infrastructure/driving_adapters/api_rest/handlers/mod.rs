//! HTTP Handlers

pub mod categories;
pub mod destinations;
pub mod reviews;
