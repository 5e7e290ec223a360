//! Travel Destinations API
//!
//! A Rust-based microservice for browsing travel destinations, their categories
//! and user reviews, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
