//! Handlers for lead listing and status updates.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use leadhub_core::types::DbId;
use leadhub_db::models::lead::{Lead, LeadListParams, UpdateLeadStatus};
use leadhub_db::repositories::LeadRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/leads
///
/// List leads matching the optional filters, newest first. Returns a
/// bare JSON array.
pub async fn list_leads(
    State(state): State<AppState>,
    Query(params): Query<LeadListParams>,
) -> AppResult<Json<Vec<Lead>>> {
    let leads = LeadRepo::list(&state.pool, &params).await?;

    Ok(Json(leads))
}

/// PUT /api/leads/{id}/status
///
/// Unconditionally set the lead's status. An unknown id is a silent
/// no-op, not an error; no allowed-status whitelist exists.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLeadStatus>,
) -> AppResult<StatusCode> {
    let affected = LeadRepo::update_status(&state.pool, id, &input.status).await?;

    tracing::info!(lead_id = id, affected, status = %input.status, "Lead status updated");

    Ok(StatusCode::OK)
}
