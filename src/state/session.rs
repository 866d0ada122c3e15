use tokio::sync::{Mutex, OwnedRwLockReadGuard, OwnedRwLockWriteGuard};

use crate::{dao::catalog::Catalog, error::ServiceError};

/// Access mode requested for a whole GraphQL operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// Shared access for queries.
    Read,
    /// Exclusive access for mutations.
    Write,
}

/// Catalog guard held for the lifetime of one GraphQL operation.
///
/// Read sessions share the catalog with other readers. A write session is
/// exclusive, so nested fields resolved under a mutation see its own writes and
/// nothing else interleaves.
pub enum CatalogSession {
    /// Shared guard, released when the session drops.
    Read(OwnedRwLockReadGuard<Catalog>),
    /// Exclusive guard; the mutex serializes resolvers of the same operation.
    Write(Mutex<OwnedRwLockWriteGuard<Catalog>>),
}

impl CatalogSession {
    /// Kind of guard this session holds.
    pub fn kind(&self) -> SessionKind {
        match self {
            CatalogSession::Read(_) => SessionKind::Read,
            CatalogSession::Write(_) => SessionKind::Write,
        }
    }

    /// Run `f` against the catalog.
    pub async fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        match self {
            CatalogSession::Read(guard) => f(&**guard),
            CatalogSession::Write(slot) => {
                let guard = slot.lock().await;
                f(&**guard)
            }
        }
    }

    /// Run `f` with mutable access to the catalog.
    ///
    /// Fails with [`ServiceError::ReadOnly`] on a read session.
    pub async fn write<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> Result<R, ServiceError> {
        match self {
            CatalogSession::Read(_) => Err(ServiceError::ReadOnly),
            CatalogSession::Write(slot) => {
                let mut guard = slot.lock().await;
                Ok(f(&mut **guard))
            }
        }
    }
}
