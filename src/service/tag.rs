use sea_orm::DatabaseConnection;

use crate::{
    data::tag::TagRepository,
    error::AppError,
    model::tag::{CreateTagParams, Tag, UpdateTagParams},
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new tag
    ///
    /// Tag names are unique; creating a duplicate fails with a 400.
    pub async fn create(&self, params: CreateTagParams) -> Result<Tag, AppError> {
        let repo = TagRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Tag '{}' already exists",
                params.name
            )));
        }

        let tag = repo.create(params).await?;

        Ok(Tag::from_entity(tag))
    }

    /// Gets a tag by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Tag>, AppError> {
        let repo = TagRepository::new(self.db);

        let tag = repo.get_by_id(id).await?;

        Ok(tag.map(Tag::from_entity))
    }

    /// Gets all tags
    pub async fn get_all(&self) -> Result<Vec<Tag>, AppError> {
        let repo = TagRepository::new(self.db);

        let tags = repo.get_all().await?;

        Ok(tags.into_iter().map(Tag::from_entity).collect())
    }

    /// Updates a tag's name
    ///
    /// Returns None if the tag doesn't exist.
    pub async fn update(&self, params: UpdateTagParams) -> Result<Option<Tag>, AppError> {
        let repo = TagRepository::new(self.db);

        if repo.get_by_id(params.id).await?.is_none() {
            return Ok(None);
        }

        if let Some(existing) = repo.find_by_name(&params.name).await? {
            if existing.id != params.id {
                return Err(AppError::BadRequest(format!(
                    "Tag '{}' already exists",
                    params.name
                )));
            }
        }

        let tag = repo.update(params).await?;

        Ok(Some(Tag::from_entity(tag)))
    }

    /// Deletes a tag, detaching it from any messages carrying it
    ///
    /// Returns true if deleted, false if not found.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = TagRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
