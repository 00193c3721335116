//! HTTP request handlers.

pub mod leads;
pub mod upload;
