use serde::Serialize;
use utoipa::ToSchema;

use crate::state::CatalogCounts;

/// Health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status, always "ok" while the process serves requests.
    pub status: String,
    /// RFC 3339 timestamp of when the catalog was seeded.
    pub started_at: String,
    /// Current number of games.
    pub games: usize,
    /// Current number of authors.
    pub authors: usize,
    /// Current number of reviews.
    pub reviews: usize,
}

impl HealthResponse {
    /// Create a health response for an operational catalog.
    pub fn ok(started_at: String, counts: CatalogCounts) -> Self {
        Self {
            status: "ok".to_string(),
            started_at,
            games: counts.games,
            authors: counts.authors,
            reviews: counts.reviews,
        }
    }
}
