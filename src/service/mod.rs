//! Business logic orchestration between controllers and the data layer.
//!
//! Services enforce the message domain rules: originals must be in English,
//! translations reference exactly one original (flat one-level structure),
//! and translations inherit the tags of their original.

pub mod language;
pub mod message;
pub mod tag;
