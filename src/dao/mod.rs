//! Entity store: row models, seed rows and the in-memory catalog.

/// In-memory tables for games, authors and reviews.
pub mod catalog;
/// Catalog error types.
pub mod error;
/// Row model definitions.
pub mod models;
/// Built-in sample rows.
pub mod seed;
