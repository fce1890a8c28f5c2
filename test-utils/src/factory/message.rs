//! Message factory for creating test message entities.
//!
//! Messages are inserted directly along with their tag join rows, bypassing
//! the service-layer validation so tests can construct arbitrary states
//! (including invalid ones).

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test messages with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::message::MessageFactory;
///
/// let translation = MessageFactory::new(&db, polish.id)
///     .content("Wiadomość")
///     .original_message_id(Some(original.id))
///     .tags(vec![tag.id])
///     .build()
///     .await?;
/// ```
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    content: String,
    language_id: i32,
    original_message_id: Option<i32>,
    tag_ids: Vec<i32>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with unique default content.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `language_id` - Language the message is written in
    pub fn new(db: &'a DatabaseConnection, language_id: i32) -> Self {
        Self {
            db,
            content: format!("Message {}", next_id()),
            language_id,
            original_message_id: None,
            tag_ids: Vec::new(),
        }
    }

    /// Sets the message content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the original message reference, making this message a translation.
    pub fn original_message_id(mut self, original_message_id: Option<i32>) -> Self {
        self.original_message_id = original_message_id;
        self
    }

    /// Sets the tags attached to the message.
    pub fn tags(mut self, tag_ids: Vec<i32>) -> Self {
        self.tag_ids = tag_ids;
        self
    }

    /// Builds and inserts the message entity and its tag join rows.
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let message = entity::message::ActiveModel {
            content: ActiveValue::Set(self.content),
            language_id: ActiveValue::Set(self.language_id),
            original_message_id: ActiveValue::Set(self.original_message_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for tag_id in self.tag_ids {
            entity::message_tag::ActiveModel {
                message_id: ActiveValue::Set(message.id),
                tag_id: ActiveValue::Set(tag_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(message)
    }
}

/// Creates an original message in the given language with default content.
pub async fn create_original(
    db: &DatabaseConnection,
    language_id: i32,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, language_id).build().await
}

/// Creates a translation of the given original message.
pub async fn create_translation(
    db: &DatabaseConnection,
    language_id: i32,
    original_message_id: i32,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, language_id)
        .original_message_id(Some(original_message_id))
        .build()
        .await
}
