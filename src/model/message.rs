//! Message domain models and parameters.
//!
//! A message is either an original (no original-message reference, written in
//! English) or a translation pointing at exactly one original. Translations
//! always carry the tags of their original.

use chrono::NaiveDateTime;
use sea_orm::DbErr;

use crate::{
    dto::message::{MessageDetailsDto, MessageDto},
    model::{language::Language, tag::Tag},
};

/// A message with its language and tags resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub content: String,
    pub language: Language,
    /// `None` for an original message, the original's id for a translation.
    pub original_message_id: Option<i32>,
    pub tags: Vec<Tag>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Message {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Message)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - The message row had no language, which the
    ///   schema's foreign key should make impossible
    pub fn from_with_relations(relations: MessageWithRelations) -> Result<Self, DbErr> {
        let language = relations.language.ok_or_else(|| {
            DbErr::Custom(format!(
                "Message {} has no language row",
                relations.message.id
            ))
        })?;

        Ok(Self {
            id: relations.message.id,
            content: relations.message.content,
            language: Language::from_entity(language),
            original_message_id: relations.message.original_message_id,
            tags: relations.tags.into_iter().map(Tag::from_entity).collect(),
            created_at: relations.message.created_at,
            updated_at: relations.message.updated_at,
        })
    }

    /// Returns whether this message is an original rather than a translation.
    pub fn is_original(&self) -> bool {
        self.original_message_id.is_none()
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            content: self.content,
            language: self.language.into_dto(),
            original_message_id: self.original_message_id,
            tags: self.tags.into_iter().map(Tag::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A message entity together with its related language and tag entities.
#[derive(Debug, Clone)]
pub struct MessageWithRelations {
    pub message: entity::message::Model,
    pub language: Option<entity::language::Model>,
    pub tags: Vec<entity::tag::Model>,
}

/// Parameters for creating a message.
#[derive(Debug, Clone)]
pub struct CreateMessageParams {
    pub original_message_id: Option<i32>,
    pub language_id: i32,
    pub content: String,
    pub tag_ids: Vec<i32>,
}

impl CreateMessageParams {
    pub fn from_dto(dto: MessageDetailsDto) -> Self {
        Self {
            original_message_id: dto.original_message_id,
            language_id: dto.language_id,
            content: dto.content,
            tag_ids: dto.tag_ids,
        }
    }
}

/// Parameters for updating a message.
#[derive(Debug, Clone)]
pub struct UpdateMessageParams {
    pub id: i32,
    pub original_message_id: Option<i32>,
    pub language_id: i32,
    pub content: String,
    pub tag_ids: Vec<i32>,
}

impl UpdateMessageParams {
    pub fn from_dto(id: i32, dto: MessageDetailsDto) -> Self {
        Self {
            id,
            original_message_id: dto.original_message_id,
            language_id: dto.language_id,
            content: dto.content,
            tag_ids: dto.tag_ids,
        }
    }
}

/// Optional filters for listing messages. At most one filter is applied;
/// precedence is content, then tag, then language.
#[derive(Debug, Clone, Default)]
pub struct MessageFilter {
    /// Case-insensitive substring match on message content.
    pub content: Option<String>,
    /// Exact tag name match.
    pub tag: Option<String>,
    /// Exact language name match.
    pub language: Option<String>,
}
