use sea_orm::DatabaseConnection;

use crate::{
    data::language::LanguageRepository,
    error::AppError,
    model::language::{CreateLanguageParams, Language, UpdateLanguageParams},
};

pub struct LanguageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LanguageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new language
    ///
    /// Language names are unique; creating a duplicate fails with a 400.
    pub async fn create(&self, params: CreateLanguageParams) -> Result<Language, AppError> {
        let repo = LanguageRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Language '{}' already exists",
                params.name
            )));
        }

        let language = repo.create(params).await?;

        Ok(Language::from_entity(language))
    }

    /// Gets a language by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Language>, AppError> {
        let repo = LanguageRepository::new(self.db);

        let language = repo.get_by_id(id).await?;

        Ok(language.map(Language::from_entity))
    }

    /// Gets all languages
    pub async fn get_all(&self) -> Result<Vec<Language>, AppError> {
        let repo = LanguageRepository::new(self.db);

        let languages = repo.get_all().await?;

        Ok(languages.into_iter().map(Language::from_entity).collect())
    }

    /// Updates a language's name
    ///
    /// Returns None if the language doesn't exist.
    pub async fn update(&self, params: UpdateLanguageParams) -> Result<Option<Language>, AppError> {
        let repo = LanguageRepository::new(self.db);

        if repo.get_by_id(params.id).await?.is_none() {
            return Ok(None);
        }

        if let Some(existing) = repo.find_by_name(&params.name).await? {
            if existing.id != params.id {
                return Err(AppError::BadRequest(format!(
                    "Language '{}' already exists",
                    params.name
                )));
            }
        }

        let language = repo.update(params).await?;

        Ok(Some(Language::from_entity(language)))
    }

    /// Deletes a language
    ///
    /// Returns true if deleted, false if not found. A language still
    /// referenced by messages cannot be deleted.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = LanguageRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let references = repo.message_count(id).await?;
        if references > 0 {
            return Err(AppError::BadRequest(format!(
                "Language {} is still used by {} message(s)",
                id, references
            )));
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
