use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ErrorDto,
        language::{LanguageDetailsDto, LanguageDto},
    },
    error::AppError,
    model::language::{CreateLanguageParams, Language, UpdateLanguageParams},
    service::language::LanguageService,
    state::AppState,
};

/// Tag for grouping language endpoints in OpenAPI documentation
pub static LANGUAGE_TAG: &str = "language";

/// Create a new language.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Language data (name)
///
/// # Returns
/// - `201 Created` - Successfully created language
/// - `400 Bad Request` - A language with the same name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/languages",
    tag = LANGUAGE_TAG,
    request_body = LanguageDetailsDto,
    responses(
        (status = 201, description = "Successfully created language", body = LanguageDto),
        (status = 400, description = "Language name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_language(
    State(state): State<AppState>,
    Json(payload): Json<LanguageDetailsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = LanguageService::new(&state.db);

    let params = CreateLanguageParams::from_dto(payload);

    let language = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(language.into_dto())))
}

/// Get all languages.
///
/// # Returns
/// - `200 OK` - List of all languages ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/languages",
    tag = LANGUAGE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved languages", body = Vec<LanguageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_languages(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = LanguageService::new(&state.db);

    let languages = service.get_all().await?;

    let dtos: Vec<LanguageDto> = languages.into_iter().map(Language::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a specific language by ID.
///
/// # Returns
/// - `200 OK` - The language
/// - `404 Not Found` - No language with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/languages/{id}",
    tag = LANGUAGE_TAG,
    params(
        ("id" = i32, Path, description = "Language ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved language", body = LanguageDto),
        (status = 404, description = "Language not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_language(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = LanguageService::new(&state.db);

    let language = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Language with id {} not found", id)))?;

    Ok((StatusCode::OK, Json(language.into_dto())))
}

/// Update a language's name.
///
/// # Returns
/// - `200 OK` - Updated language
/// - `400 Bad Request` - Another language already uses the name
/// - `404 Not Found` - No language with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/languages/{id}",
    tag = LANGUAGE_TAG,
    params(
        ("id" = i32, Path, description = "Language ID")
    ),
    request_body = LanguageDetailsDto,
    responses(
        (status = 200, description = "Successfully updated language", body = LanguageDto),
        (status = 400, description = "Language name already in use", body = ErrorDto),
        (status = 404, description = "Language not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_language(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<LanguageDetailsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = LanguageService::new(&state.db);

    let params = UpdateLanguageParams::from_dto(id, payload);

    let language = service
        .update(params)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Language with id {} not found", id)))?;

    Ok((StatusCode::OK, Json(language.into_dto())))
}

/// Delete a language.
///
/// A language still referenced by messages cannot be deleted.
///
/// # Returns
/// - `204 No Content` - Successfully deleted language
/// - `400 Bad Request` - Language is still used by messages
/// - `404 Not Found` - No language with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/languages/{id}",
    tag = LANGUAGE_TAG,
    params(
        ("id" = i32, Path, description = "Language ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted language"),
        (status = 400, description = "Language is still used by messages", body = ErrorDto),
        (status = 404, description = "Language not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_language(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = LanguageService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(format!(
            "Language with id {} not found",
            id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
