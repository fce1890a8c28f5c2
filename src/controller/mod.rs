//! HTTP request handlers and DTO conversion.
//!
//! Controllers validate input, convert DTOs to operation params, call the
//! service layer, and convert the returned domain models back to DTOs.

pub mod language;
pub mod message;
pub mod tag;
