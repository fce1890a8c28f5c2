use crate::dto::language::{LanguageDetailsDto, LanguageDto};

/// Name of the language every original message must be written in.
pub const ENGLISH: &str = "English";

/// A language messages can be written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub id: i32,
    pub name: String,
}

impl Language {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::language::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Returns whether this is the English language.
    pub fn is_english(&self) -> bool {
        self.name == ENGLISH
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> LanguageDto {
        LanguageDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating a language.
#[derive(Debug, Clone)]
pub struct CreateLanguageParams {
    pub name: String,
}

impl CreateLanguageParams {
    pub fn from_dto(dto: LanguageDetailsDto) -> Self {
        Self { name: dto.name }
    }
}

/// Parameters for updating a language.
#[derive(Debug, Clone)]
pub struct UpdateLanguageParams {
    pub id: i32,
    pub name: String,
}

impl UpdateLanguageParams {
    pub fn from_dto(id: i32, dto: LanguageDetailsDto) -> Self {
        Self { id, name: dto.name }
    }
}
