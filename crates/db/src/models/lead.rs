//! Lead model and DTOs.

use leadhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `leads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lead {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub source: Option<String>,
    pub owner: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// Query parameters for `GET /api/leads`.
///
/// Each filter is optional; supplied filters combine with AND.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadListParams {
    /// Case-insensitive substring match on `owner`.
    pub owner: Option<String>,
    /// Exact match on `status`.
    pub status: Option<String>,
    /// Case-insensitive substring match on `location`.
    pub location: Option<String>,
    /// Case-insensitive substring match on `name` OR `phone`.
    pub search: Option<String>,
}

/// Request body for `PUT /api/leads/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLeadStatus {
    pub status: String,
}
