//! SeaORM entity models for the translator database schema.

pub mod language;
pub mod message;
pub mod message_tag;
pub mod prelude;
pub mod tag;
