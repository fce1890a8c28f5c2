use crate::dto::tag::{TagDetailsDto, TagDto};

/// A tag messages can be labelled with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

impl Tag {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating a tag.
#[derive(Debug, Clone)]
pub struct CreateTagParams {
    pub name: String,
}

impl CreateTagParams {
    pub fn from_dto(dto: TagDetailsDto) -> Self {
        Self { name: dto.name }
    }
}

/// Parameters for updating a tag.
#[derive(Debug, Clone)]
pub struct UpdateTagParams {
    pub id: i32,
    pub name: String,
}

impl UpdateTagParams {
    pub fn from_dto(id: i32, dto: TagDetailsDto) -> Self {
        Self { id, name: dto.name }
    }
}
