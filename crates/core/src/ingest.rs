//! Pure half of the CSV ingestion pipeline.
//!
//! This module has zero I/O beyond the `Read` source it is handed. It
//! provides:
//!
//! - [`SourceRow`]: one raw CSV record keyed by the header row
//! - [`RowReader`]: a lazy, single-pass iterator over source rows
//! - [`LeadDraft`]: a validated, defaulted row ready for insertion
//!
//! Validation policy: a row is kept only when `name` is non-empty and at
//! least one of `email` / `phone` is non-empty. Rejected rows are skipped
//! silently; they still count toward the parsed-row total reported by the
//! upload endpoint.

use std::io::Read;

use serde::Deserialize;

/// Owner assigned when the source row has no owner cell.
pub const DEFAULT_OWNER: &str = "Unassigned";

/// Status assigned when the source row has no status cell.
pub const DEFAULT_STATUS: &str = "New";

/// One raw record from the uploaded file, as named by the header row.
///
/// Every field is optional: the header may omit columns entirely, and
/// individual cells may be empty. Unknown columns are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A validated lead ready to be inserted.
///
/// Construction via [`LeadDraft::from_row`] is the only path from a raw
/// row to a stored lead, so the name/contact invariant and the
/// owner/status defaults are enforced in exactly one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadDraft {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub source: Option<String>,
    pub owner: String,
    pub status: String,
}

impl LeadDraft {
    /// Validate a raw row, returning `None` when it must be skipped.
    ///
    /// Skip conditions: empty/absent `name`, or both `email` and `phone`
    /// empty/absent. Whitespace-only cells count as empty.
    pub fn from_row(row: SourceRow) -> Option<Self> {
        let name = non_empty(row.name)?;
        let email = non_empty(row.email);
        let phone = non_empty(row.phone);
        if email.is_none() && phone.is_none() {
            return None;
        }

        Some(Self {
            name,
            email,
            phone,
            location: non_empty(row.location),
            source: non_empty(row.source),
            owner: non_empty(row.owner).unwrap_or_else(|| DEFAULT_OWNER.to_string()),
            status: non_empty(row.status).unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        })
    }
}

/// Lazy reader over a delimited-text source with a header row.
///
/// Single-pass and not restartable: `rows()` consumes the reader.
pub struct RowReader<R: Read> {
    inner: csv::Reader<R>,
}

impl<R: Read> RowReader<R> {
    /// Wrap a byte source in a header-aware CSV reader.
    ///
    /// `flexible` tolerates ragged rows so one short record does not
    /// abort the rest of the file.
    pub fn from_reader(source: R) -> Self {
        let inner = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { inner }
    }

    /// Iterate the source rows in file order.
    pub fn rows(self) -> impl Iterator<Item = Result<SourceRow, csv::Error>> {
        self.inner.into_deserialize()
    }
}

/// Trim a cell and drop it entirely when nothing is left.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
