use sea_orm::DatabaseConnection;

use crate::{
    data::{language::LanguageRepository, message::MessageRepository, tag::TagRepository},
    error::{domain::DomainError, AppError},
    model::{
        language::Language,
        message::{
            CreateMessageParams, Message, MessageFilter, MessageWithRelations,
            UpdateMessageParams,
        },
    },
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new message
    ///
    /// Originals (no original-message reference) must be in English.
    /// Translations must reference an existing original and inherit its tags;
    /// any tags supplied for a translation are ignored.
    pub async fn create(&self, params: CreateMessageParams) -> Result<Message, AppError> {
        let repo = MessageRepository::new(self.db);

        let language = LanguageRepository::new(self.db)
            .get_by_id(params.language_id)
            .await?
            .map(Language::from_entity)
            .ok_or_else(|| {
                AppError::NotFound(format!("Language with id {} not found", params.language_id))
            })?;

        let tag_ids = match params.original_message_id {
            None => {
                if !language.is_english() {
                    return Err(DomainError::OriginalMessageNotInEnglish.into());
                }
                self.check_tags_exist(&params.tag_ids).await?;
                params.tag_ids.clone()
            }
            Some(original_id) => {
                let original = repo.get_entity(original_id).await?.ok_or_else(|| {
                    AppError::NotFound(format!(
                        "Original message with id {} not found",
                        original_id
                    ))
                })?;
                if original.original_message_id.is_some() {
                    return Err(DomainError::OriginalMessageIsNotOriginal(original_id).into());
                }
                repo.get_tag_ids(original_id).await?
            }
        };

        let created = repo
            .create(CreateMessageParams { tag_ids, ..params })
            .await?;

        let full_result = repo
            .get_by_id(created.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Message not found after creation".to_string()))?;

        Ok(Message::from_with_relations(full_result)?)
    }

    /// Gets a specific message by ID with its language and tags
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Message>, AppError> {
        let repo = MessageRepository::new(self.db);

        let result = repo.get_by_id(id).await?;

        result
            .map(Message::from_with_relations)
            .transpose()
            .map_err(Into::into)
    }

    /// Gets messages, optionally filtered by content fragment, tag name, or
    /// language name
    pub async fn get_filtered(&self, filter: MessageFilter) -> Result<Vec<Message>, AppError> {
        let repo = MessageRepository::new(self.db);

        let results = if let Some(fragment) = filter.content {
            repo.find_by_content(&fragment).await?
        } else if let Some(tag) = filter.tag {
            repo.find_by_tag_name(&tag).await?
        } else if let Some(language) = filter.language {
            repo.find_by_language_name(&language).await?
        } else {
            repo.get_all().await?
        };

        Self::into_domain(results)
    }

    /// Gets the translations of an original message
    ///
    /// Returns None if no message with the given ID exists.
    pub async fn get_translations(&self, id: i32) -> Result<Option<Vec<Message>>, AppError> {
        let repo = MessageRepository::new(self.db);

        if repo.get_entity(id).await?.is_none() {
            return Ok(None);
        }

        let results = repo.get_translations(id).await?;

        Self::into_domain(results).map(Some)
    }

    /// Updates a message
    ///
    /// An original stays an original: it cannot be given an original-message
    /// reference and its language must remain English. A translation stays a
    /// translation: its reference cannot be cleared, and its tags are always
    /// re-copied from the original. Updating an original's tags re-syncs the
    /// tags of all its translations.
    ///
    /// Returns None if the message doesn't exist.
    pub async fn update(&self, params: UpdateMessageParams) -> Result<Option<Message>, AppError> {
        let repo = MessageRepository::new(self.db);

        let Some(existing) = repo.get_entity(params.id).await? else {
            return Ok(None);
        };

        let language = LanguageRepository::new(self.db)
            .get_by_id(params.language_id)
            .await?
            .map(Language::from_entity)
            .ok_or_else(|| {
                AppError::NotFound(format!("Language with id {} not found", params.language_id))
            })?;

        match existing.original_message_id {
            None => {
                if params.original_message_id.is_some() {
                    return Err(DomainError::OriginalMessageIsNotNull.into());
                }
                if !language.is_english() {
                    return Err(DomainError::OriginalMessageNotInEnglish.into());
                }
                self.check_tags_exist(&params.tag_ids).await?;

                let tag_ids = params.tag_ids.clone();
                repo.update(params.clone()).await?;

                // Translations mirror their original's tags
                for translation in repo.get_translation_entities(params.id).await? {
                    repo.set_tags(translation.id, tag_ids.clone()).await?;
                }
            }
            Some(_) => {
                let original_id = params
                    .original_message_id
                    .ok_or(DomainError::TranslationCannotBeConverted)?;

                let original = repo.get_entity(original_id).await?.ok_or_else(|| {
                    AppError::NotFound(format!(
                        "Original message with id {} not found",
                        original_id
                    ))
                })?;
                if original.original_message_id.is_some() {
                    return Err(DomainError::OriginalMessageIsNotOriginal(original_id).into());
                }

                let tag_ids = repo.get_tag_ids(original_id).await?;
                repo.update(UpdateMessageParams { tag_ids, ..params })
                    .await?;
            }
        }

        let full_result = repo.get_by_id(existing.id).await?;

        full_result
            .map(Message::from_with_relations)
            .transpose()
            .map_err(Into::into)
    }

    /// Deletes a message
    ///
    /// Deleting an original also deletes all of its translations. Returns
    /// true if deleted, false if not found.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = MessageRepository::new(self.db);

        if repo.get_entity(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }

    async fn check_tags_exist(&self, tag_ids: &[i32]) -> Result<(), AppError> {
        let repo = TagRepository::new(self.db);

        for &tag_id in tag_ids {
            if repo.get_by_id(tag_id).await?.is_none() {
                return Err(AppError::NotFound(format!(
                    "Tag with id {} not found",
                    tag_id
                )));
            }
        }

        Ok(())
    }

    fn into_domain(results: Vec<MessageWithRelations>) -> Result<Vec<Message>, AppError> {
        results
            .into_iter()
            .map(Message::from_with_relations)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }
}
