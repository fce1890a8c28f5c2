//! Factory methods for creating test data.
//!
//! Factories insert entities directly, bypassing the service-layer rules, so
//! tests can seed arbitrary database states with minimal boilerplate.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let english = factory::create_english(&db).await?;
//!     let tag = factory::create_tag(&db).await?;
//!     let original = factory::create_original(&db, english.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let message = factory::message::MessageFactory::new(&db, english.id)
//!     .content("Custom content")
//!     .tags(vec![tag.id])
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod language;
pub mod message;
pub mod tag;

// Re-export commonly used factory functions for concise usage
pub use language::{create_english, create_language, create_language_named};
pub use message::{create_original, create_translation};
pub use tag::{create_tag, create_tag_named};
