//! Language factory for creating test language entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test languages with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::language::LanguageFactory;
///
/// let language = LanguageFactory::new(&db)
///     .name("Polish")
///     .build()
///     .await?;
/// ```
pub struct LanguageFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> LanguageFactory<'a> {
    /// Creates a new LanguageFactory with a unique default name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Language {}", next_id()),
        }
    }

    /// Sets the language name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the language entity into the database.
    pub async fn build(self) -> Result<entity::language::Model, DbErr> {
        entity::language::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a language with a unique default name.
pub async fn create_language(db: &DatabaseConnection) -> Result<entity::language::Model, DbErr> {
    LanguageFactory::new(db).build().await
}

/// Creates a language with the given name.
pub async fn create_language_named(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::language::Model, DbErr> {
    LanguageFactory::new(db).name(name).build().await
}

/// Creates the English language, the required language for original messages.
pub async fn create_english(db: &DatabaseConnection) -> Result<entity::language::Model, DbErr> {
    LanguageFactory::new(db).name("English").build().await
}
