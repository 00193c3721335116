//! Database row structs and request DTOs.

pub mod lead;
