use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A language as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LanguageDto {
    pub id: i32,
    pub name: String,
}

/// Request body for creating or updating a language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LanguageDetailsDto {
    pub name: String,
}
