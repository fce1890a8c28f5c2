use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::{language::LanguageDto, tag::TagDto};

/// A message as returned by the API.
///
/// `original_message_id` is `null` for an original message and carries the
/// id of the original for a translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub id: i32,
    pub content: String,
    pub language: LanguageDto,
    pub original_message_id: Option<i32>,
    pub tags: Vec<TagDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for creating or updating a message.
///
/// For translations (`original_message_id` set) the supplied `tag_ids` are
/// ignored: translations always carry the tags of their original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDetailsDto {
    pub original_message_id: Option<i32>,
    pub language_id: i32,
    pub content: String,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
}
