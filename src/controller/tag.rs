use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ErrorDto,
        tag::{TagDetailsDto, TagDto},
    },
    error::AppError,
    model::tag::{CreateTagParams, Tag, UpdateTagParams},
    service::tag::TagService,
    state::AppState,
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

/// Create a new tag.
///
/// # Returns
/// - `201 Created` - Successfully created tag
/// - `400 Bad Request` - A tag with the same name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/tags",
    tag = TAG_TAG,
    request_body = TagDetailsDto,
    responses(
        (status = 201, description = "Successfully created tag", body = TagDto),
        (status = 400, description = "Tag name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tag(
    State(state): State<AppState>,
    Json(payload): Json<TagDetailsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TagService::new(&state.db);

    let params = CreateTagParams::from_dto(payload);

    let tag = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(tag.into_dto())))
}

/// Get all tags.
///
/// # Returns
/// - `200 OK` - List of all tags ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "Successfully retrieved tags", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = TagService::new(&state.db);

    let tags = service.get_all().await?;

    let dtos: Vec<TagDto> = tags.into_iter().map(Tag::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a specific tag by ID.
///
/// # Returns
/// - `200 OK` - The tag
/// - `404 Not Found` - No tag with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tag", body = TagDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TagService::new(&state.db);

    let tag = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Tag with id {} not found", id)))?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

/// Update a tag's name.
///
/// # Returns
/// - `200 OK` - Updated tag
/// - `400 Bad Request` - Another tag already uses the name
/// - `404 Not Found` - No tag with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    request_body = TagDetailsDto,
    responses(
        (status = 200, description = "Successfully updated tag", body = TagDto),
        (status = 400, description = "Tag name already in use", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<TagDetailsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TagService::new(&state.db);

    let params = UpdateTagParams::from_dto(id, payload);

    let tag = service
        .update(params)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Tag with id {} not found", id)))?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

/// Delete a tag.
///
/// The tag is detached from any messages carrying it.
///
/// # Returns
/// - `204 No Content` - Successfully deleted tag
/// - `404 Not Found` - No tag with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted tag"),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TagService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(format!("Tag with id {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
