//! Serialization DTOs for the HTTP surface.
//!
//! These types define the JSON request and response bodies of the REST API.
//! Domain models convert into response DTOs via `into_dto`, and request DTOs
//! convert into operation params in the controller layer.

pub mod api;
pub mod language;
pub mod message;
pub mod tag;
