use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    dto::{
        api::ErrorDto,
        message::{MessageDetailsDto, MessageDto},
    },
    error::AppError,
    model::message::{CreateMessageParams, Message, MessageFilter, UpdateMessageParams},
    service::message::MessageService,
    state::AppState,
};

/// Tag for grouping message endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

#[derive(Deserialize)]
pub struct MessageFilterQuery {
    pub content: Option<String>,
    pub tag: Option<String>,
    pub language: Option<String>,
}

impl MessageFilterQuery {
    fn into_filter(self) -> MessageFilter {
        MessageFilter {
            content: self.content,
            tag: self.tag,
            language: self.language,
        }
    }
}

/// Create a new message.
///
/// A message without `original_message_id` is an original and must be in
/// English. A message with `original_message_id` is a translation of that
/// original and inherits its tags (supplied `tag_ids` are ignored).
///
/// # Returns
/// - `201 Created` - Successfully created message
/// - `400 Bad Request` - Domain invariant violated (original not in English,
///   referenced message is itself a translation)
/// - `404 Not Found` - Referenced language, tag, or original does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    request_body = MessageDetailsDto,
    responses(
        (status = 201, description = "Successfully created message", body = MessageDto),
        (status = 400, description = "Domain invariant violated", body = ErrorDto),
        (status = 404, description = "Referenced resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_message(
    State(state): State<AppState>,
    Json(payload): Json<MessageDetailsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MessageService::new(&state.db);

    let params = CreateMessageParams::from_dto(payload);

    let message = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Get messages, optionally filtered.
///
/// At most one filter applies; precedence is `content` (case-insensitive
/// substring), then `tag` (exact tag name), then `language` (exact language
/// name). Without a filter all messages are returned.
///
/// # Returns
/// - `200 OK` - List of matching messages
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    params(
        ("content" = Option<String>, Query, description = "Case-insensitive content fragment"),
        ("tag" = Option<String>, Query, description = "Exact tag name"),
        ("language" = Option<String>, Query, description = "Exact language name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved messages", body = Vec<MessageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    Query(query): Query<MessageFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = MessageService::new(&state.db);

    let messages = service.get_filtered(query.into_filter()).await?;

    let dtos: Vec<MessageDto> = messages.into_iter().map(Message::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a specific message by ID.
///
/// # Returns
/// - `200 OK` - The message with its language and tags
/// - `404 Not Found` - No message with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/messages/{id}",
    tag = MESSAGE_TAG,
    params(
        ("id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved message", body = MessageDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MessageService::new(&state.db);

    let message = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Message with id {} not found", id)))?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}

/// Get the translations of an original message.
///
/// # Returns
/// - `200 OK` - Translations of the message (empty for a translation)
/// - `404 Not Found` - No message with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/messages/{id}/translations",
    tag = MESSAGE_TAG,
    params(
        ("id" = i32, Path, description = "Original message ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved translations", body = Vec<MessageDto>),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_message_translations(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MessageService::new(&state.db);

    let translations = service
        .get_translations(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Message with id {} not found", id)))?;

    let dtos: Vec<MessageDto> = translations.into_iter().map(Message::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Update a message.
///
/// An original stays an original and a translation stays a translation; see
/// the domain rules on `POST /api/messages`. Updating an original's tags
/// re-syncs the tags of its translations.
///
/// # Returns
/// - `200 OK` - Updated message
/// - `400 Bad Request` - Domain invariant violated
/// - `404 Not Found` - Message, language, tag, or original does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/messages/{id}",
    tag = MESSAGE_TAG,
    params(
        ("id" = i32, Path, description = "Message ID")
    ),
    request_body = MessageDetailsDto,
    responses(
        (status = 200, description = "Successfully updated message", body = MessageDto),
        (status = 400, description = "Domain invariant violated", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<MessageDetailsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MessageService::new(&state.db);

    let params = UpdateMessageParams::from_dto(id, payload);

    let message = service
        .update(params)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Message with id {} not found", id)))?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}

/// Delete a message.
///
/// Deleting an original also deletes all of its translations.
///
/// # Returns
/// - `204 No Content` - Successfully deleted message
/// - `404 Not Found` - No message with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/messages/{id}",
    tag = MESSAGE_TAG,
    params(
        ("id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted message"),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MessageService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(format!(
            "Message with id {} not found",
            id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
