//! Errors surfaced by the service layer.

use thiserror::Error;

use crate::dao::error::CatalogError;

/// Errors that can occur in service layer operations.
///
/// Lookup misses are not errors: they surface as `None` and render as `null`.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A write was attempted through a session that only holds a read guard.
    #[error("catalog is read-only for this operation")]
    ReadOnly,
    /// The catalog refused the change.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
