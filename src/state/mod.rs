//! Shared application state and per-request catalog sessions.

mod session;

use std::{sync::Arc, time::SystemTime};

use tokio::sync::{Mutex, RwLock};

use crate::{
    dao::catalog::Catalog,
    graphql::{AppSchema, create_schema},
};

pub use self::session::{CatalogSession, SessionKind};

/// [`AppState`] handle shared between handlers.
pub type SharedState = Arc<AppState>;

/// Row counts of each catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogCounts {
    /// Rows in the games table.
    pub games: usize,
    /// Rows in the authors table.
    pub authors: usize,
    /// Rows in the reviews table.
    pub reviews: usize,
}

/// Central application state owning the catalog and the executable schema.
pub struct AppState {
    catalog: Arc<RwLock<Catalog>>,
    schema: AppSchema,
    started_at: SystemTime,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(catalog: Catalog) -> SharedState {
        Arc::new(Self {
            catalog: Arc::new(RwLock::new(catalog)),
            schema: create_schema(),
            started_at: SystemTime::now(),
        })
    }

    /// Executable GraphQL schema.
    pub fn schema(&self) -> &AppSchema {
        &self.schema
    }

    /// Time at which the state was created.
    pub fn started_at(&self) -> SystemTime {
        self.started_at
    }

    /// Acquire a catalog session, waiting for any conflicting writer or readers.
    pub async fn session(&self, kind: SessionKind) -> CatalogSession {
        match kind {
            SessionKind::Read => CatalogSession::Read(self.catalog.clone().read_owned().await),
            SessionKind::Write => {
                CatalogSession::Write(Mutex::new(self.catalog.clone().write_owned().await))
            }
        }
    }

    /// Snapshot the number of rows in each table.
    pub async fn counts(&self) -> CatalogCounts {
        let catalog = self.catalog.read().await;
        CatalogCounts {
            games: catalog.games().len(),
            authors: catalog.authors().len(),
            reviews: catalog.reviews().len(),
        }
    }
}
