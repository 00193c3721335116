//! Route definitions for lead ingestion and querying.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{leads, upload};
use crate::state::AppState;

/// Lead routes mounted under `/api`.
///
/// ```text
/// POST /upload              -> upload_leads
/// GET  /leads               -> list_leads
/// PUT  /leads/{id}/status   -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload::upload_leads))
        .route("/leads", get(leads::list_leads))
        .route("/leads/{id}/status", put(leads::update_status))
}
