//! Domain models and operation-specific parameter types.
//!
//! Domain models are what the service layer returns to controllers.
//! Conversion from SeaORM entities happens at the repository boundary, and
//! conversion to DTOs happens at the controller boundary via `into_dto`.

pub mod language;
pub mod message;
pub mod tag;
