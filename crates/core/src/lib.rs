//! Domain logic for the lead-management backend.
//!
//! This crate has no database, async, or HTTP dependencies. It provides
//! the CSV ingestion pipeline's pure half (row parsing, validation,
//! defaulting) plus the shared type aliases and error enum the other
//! crates build on.

pub mod error;
pub mod ingest;
pub mod types;
