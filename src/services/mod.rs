/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Create, delete and update operations on games.
pub mod mutation_service;
/// Entry-point list and lookup operations.
pub mod query_service;
/// Relationship resolution between games, authors and reviews.
pub mod relation_service;
