//! Errors raised when rows would break a catalog invariant.

use std::fmt;

use thiserror::Error;
use validator::ValidationErrors;

/// Result alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Tables held by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// The games table.
    Games,
    /// The authors table.
    Authors,
    /// The reviews table.
    Reviews,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Table::Games => "games",
            Table::Authors => "authors",
            Table::Reviews => "reviews",
        };
        f.write_str(name)
    }
}

/// Error raised when rows would break a table invariant.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Another row of the table already uses this id.
    #[error("duplicate id `{id}` in {table}")]
    DuplicateId {
        /// Table holding the clash.
        table: Table,
        /// Id used twice.
        id: String,
    },
    /// A row failed its field validation rules.
    #[error("invalid row `{id}` in {table}: {source}")]
    InvalidRow {
        /// Table the row was meant for.
        table: Table,
        /// Id of the rejected row.
        id: String,
        /// Rules the row broke.
        #[source]
        source: ValidationErrors,
    },
}
