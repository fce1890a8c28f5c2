use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A tag as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub id: i32,
    pub name: String,
}

/// Request body for creating or updating a tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TagDetailsDto {
    pub name: String,
}
