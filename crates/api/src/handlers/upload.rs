//! Handler for the CSV upload endpoint.
//!
//! Accepts a multipart form with a single `file` field, stages the bytes
//! to disk, runs the ingestion pipeline, and removes the staged file
//! whether ingestion succeeded or failed.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use leadhub_core::error::CoreError;
use leadhub_core::ingest::{LeadDraft, RowReader};
use leadhub_db::repositories::LeadRepo;
use leadhub_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response for a successful upload.
///
/// `count` is the number of rows parsed from the file, including rows
/// skipped by validation. It is NOT the number of leads stored.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub count: usize,
}

/// Disambiguates staged filenames when two uploads land in the same
/// millisecond.
static UPLOAD_SEQ: AtomicU64 = AtomicU64::new(0);

/// POST /api/upload
///
/// Stage the uploaded file, ingest it row by row, and report the parsed
/// row count. Missing or misnamed file field is a 400.
pub async fn upload_leads(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut file_bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            file_bytes = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?,
            );
            break;
        }
    }

    let Some(data) = file_bytes else {
        return Err(AppError::BadRequest(
            "No file attached: expected a multipart field named 'file'".to_string(),
        ));
    };

    let staged = stage_path(Path::new(&state.config.upload_dir));
    if let Some(parent) = staged.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;
    }
    tokio::fs::write(&staged, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to stage upload: {e}")))?;

    let outcome = ingest_staged_file(&state.pool, &staged).await;

    // Cleanup happens on both success and failure paths before the
    // result is surfaced.
    if let Err(e) = tokio::fs::remove_file(&staged).await {
        tracing::warn!(path = %staged.display(), error = %e, "Failed to remove staged upload");
    }

    let count = outcome?;
    tracing::info!(rows = count, "CSV upload ingested");

    Ok(Json(UploadResponse {
        message: "Upload complete".to_string(),
        count,
    }))
}

/// Build a unique staging path under the upload directory.
fn stage_path(upload_dir: &Path) -> PathBuf {
    let stamp = chrono::Utc::now().timestamp_millis();
    let seq = UPLOAD_SEQ.fetch_add(1, Ordering::Relaxed);
    upload_dir.join(format!("upload-{stamp}-{seq}.csv"))
}

/// Parse the staged file and insert each accepted row.
///
/// Returns the total number of parsed rows, including skipped ones.
/// Inserts run sequentially with no wrapping transaction: the first
/// failing insert aborts the remainder while earlier inserts stay
/// committed.
async fn ingest_staged_file(pool: &DbPool, path: &Path) -> AppResult<usize> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to read staged upload: {e}")))?;

    let mut total = 0usize;
    let mut stored = 0usize;

    for row in RowReader::from_reader(data.as_slice()).rows() {
        let row = row.map_err(CoreError::from)?;
        total += 1;

        if let Some(draft) = LeadDraft::from_row(row) {
            LeadRepo::insert(pool, &draft).await?;
            stored += 1;
        }
    }

    tracing::debug!(total, stored, skipped = total - stored, "Ingestion pass complete");

    Ok(total)
}
