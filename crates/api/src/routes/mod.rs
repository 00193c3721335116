pub mod health;
pub mod leads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// POST /upload                CSV ingestion
/// GET  /leads                 filtered listing
/// PUT  /leads/{id}/status     status update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(leads::router())
}
