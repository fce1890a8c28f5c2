use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        language::{self, LANGUAGE_TAG},
        message::{self, MESSAGE_TAG},
        tag::{self, TAG_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Translator API",
        description = "CRUD backend for managing translated messages"
    ),
    tags(
        (name = LANGUAGE_TAG, description = "Language management"),
        (name = TAG_TAG, description = "Tag management"),
        (name = MESSAGE_TAG, description = "Original message and translation management")
    )
)]
struct ApiDoc;

pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(language::get_languages, language::create_language))
        .routes(routes!(
            language::get_language,
            language::update_language,
            language::delete_language
        ))
        .routes(routes!(tag::get_tags, tag::create_tag))
        .routes(routes!(tag::get_tag, tag::update_tag, tag::delete_tag))
        .routes(routes!(message::get_messages, message::create_message))
        .routes(routes!(
            message::get_message,
            message::update_message,
            message::delete_message
        ))
        .routes(routes!(message::get_message_translations))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
