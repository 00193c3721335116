//! Repository for the `leads` table.
//!
//! Provides the per-row insert used by CSV ingestion, the filtered list
//! query, and the unconditional status update. Filter predicates are
//! assembled with [`sqlx::QueryBuilder`] so every user-supplied value is
//! a bound parameter, never interpolated into the SQL text.

use sqlx::{PgPool, QueryBuilder};

use leadhub_core::ingest::LeadDraft;
use leadhub_core::types::DbId;

use crate::models::lead::{Lead, LeadListParams};

/// Column list for `leads` queries.
const LEAD_COLUMNS: &str =
    "id, name, email, phone, location, source, owner, status, created_at";

/// Provides insert, filtered list, and status update for leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert one validated lead and return the stored row.
    ///
    /// `id` and `created_at` are assigned by the database. Callers that
    /// ingest a batch invoke this once per row with no surrounding
    /// transaction; the first failure aborts the remainder of the batch
    /// while earlier inserts stay committed.
    pub async fn insert(pool: &PgPool, draft: &LeadDraft) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads (name, email, phone, location, source, owner, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {LEAD_COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(&draft.name)
            .bind(draft.email.as_deref())
            .bind(draft.phone.as_deref())
            .bind(draft.location.as_deref())
            .bind(draft.source.as_deref())
            .bind(&draft.owner)
            .bind(&draft.status)
            .fetch_one(pool)
            .await
    }

    /// List leads matching the supplied filters, newest first.
    ///
    /// Absent filters are not applied; an empty filter set returns every
    /// lead. `owner`, `location`, and `search` are case-insensitive
    /// substring matches (`ILIKE`); `status` is an exact match. `search`
    /// matches when either `name` or `phone` contains the term.
    pub async fn list(pool: &PgPool, params: &LeadListParams) -> Result<Vec<Lead>, sqlx::Error> {
        let mut qb = QueryBuilder::new(format!("SELECT {LEAD_COLUMNS} FROM leads"));
        let mut sep = " WHERE ";

        if let Some(owner) = provided(&params.owner) {
            qb.push(sep).push("owner ILIKE ").push_bind(contains(owner));
            sep = " AND ";
        }
        if let Some(status) = provided(&params.status) {
            qb.push(sep).push("status = ").push_bind(status.to_string());
            sep = " AND ";
        }
        if let Some(location) = provided(&params.location) {
            qb.push(sep)
                .push("location ILIKE ")
                .push_bind(contains(location));
            sep = " AND ";
        }
        if let Some(search) = provided(&params.search) {
            qb.push(sep).push("(name ILIKE ");
            qb.push_bind(contains(search));
            qb.push(" OR phone ILIKE ");
            qb.push_bind(contains(search));
            qb.push(")");
        }

        // `id DESC` breaks created_at ties so same-batch inserts still
        // come back newest-inserted first.
        qb.push(" ORDER BY created_at DESC, id DESC");

        qb.build_query_as::<Lead>().fetch_all(pool).await
    }

    /// Set the status of the lead with the given id.
    ///
    /// Returns the number of rows affected. An unknown id affects zero
    /// rows and is not an error. `created_at` is never touched.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE leads SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Treat an empty filter value (`?owner=`) the same as an absent one.
fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Wrap a filter term in `%` wildcards for substring matching.
fn contains(term: &str) -> String {
    format!("%{term}%")
}
