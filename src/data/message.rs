use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::model::message::{CreateMessageParams, MessageWithRelations, UpdateMessageParams};

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new message with its tag join rows.
    ///
    /// The caller is expected to have resolved `tag_ids` already (for
    /// translations that means the tags of the original).
    pub async fn create(
        &self,
        params: CreateMessageParams,
    ) -> Result<entity::message::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let message = entity::message::ActiveModel {
            content: ActiveValue::Set(params.content),
            language_id: ActiveValue::Set(params.language_id),
            original_message_id: ActiveValue::Set(params.original_message_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for tag_id in params.tag_ids {
            entity::message_tag::ActiveModel {
                message_id: ActiveValue::Set(message.id),
                tag_id: ActiveValue::Set(tag_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(message)
    }

    /// Gets the raw message entity by ID without relations
    pub async fn get_entity(&self, id: i32) -> Result<Option<entity::message::Model>, DbErr> {
        entity::prelude::Message::find_by_id(id).one(self.db).await
    }

    /// Gets a message by ID with its language and tags
    pub async fn get_by_id(&self, id: i32) -> Result<Option<MessageWithRelations>, DbErr> {
        let result = entity::prelude::Message::find_by_id(id)
            .find_also_related(entity::prelude::Language)
            .one(self.db)
            .await?;

        match result {
            Some((message, language)) => {
                let tags = self.tags_of(&message).await?;
                Ok(Some(MessageWithRelations {
                    message,
                    language,
                    tags,
                }))
            }
            None => Ok(None),
        }
    }

    /// Gets all messages with their languages and tags
    pub async fn get_all(&self) -> Result<Vec<MessageWithRelations>, DbErr> {
        let messages = entity::prelude::Message::find()
            .find_also_related(entity::prelude::Language)
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        self.with_tags(messages).await
    }

    /// Finds messages whose content contains the given fragment.
    ///
    /// Matching is a case-insensitive substring match (SQLite `LIKE`).
    pub async fn find_by_content(
        &self,
        fragment: &str,
    ) -> Result<Vec<MessageWithRelations>, DbErr> {
        let messages = entity::prelude::Message::find()
            .find_also_related(entity::prelude::Language)
            .filter(entity::message::Column::Content.contains(fragment))
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        self.with_tags(messages).await
    }

    /// Finds messages carrying the tag with the given name
    pub async fn find_by_tag_name(&self, name: &str) -> Result<Vec<MessageWithRelations>, DbErr> {
        let tag = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.eq(name))
            .one(self.db)
            .await?;

        let Some(tag) = tag else {
            return Ok(Vec::new());
        };

        let links = entity::prelude::MessageTag::find()
            .filter(entity::message_tag::Column::TagId.eq(tag.id))
            .all(self.db)
            .await?;
        let message_ids: Vec<i32> = links.into_iter().map(|link| link.message_id).collect();

        if message_ids.is_empty() {
            return Ok(Vec::new());
        }

        let messages = entity::prelude::Message::find()
            .find_also_related(entity::prelude::Language)
            .filter(entity::message::Column::Id.is_in(message_ids))
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        self.with_tags(messages).await
    }

    /// Finds messages written in the language with the given name
    pub async fn find_by_language_name(
        &self,
        name: &str,
    ) -> Result<Vec<MessageWithRelations>, DbErr> {
        let messages = entity::prelude::Message::find()
            .find_also_related(entity::prelude::Language)
            .filter(entity::language::Column::Name.eq(name))
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        self.with_tags(messages).await
    }

    /// Gets the translations of an original message
    pub async fn get_translations(
        &self,
        original_message_id: i32,
    ) -> Result<Vec<MessageWithRelations>, DbErr> {
        let messages = entity::prelude::Message::find()
            .find_also_related(entity::prelude::Language)
            .filter(entity::message::Column::OriginalMessageId.eq(original_message_id))
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        self.with_tags(messages).await
    }

    /// Gets the raw translation entities of an original message
    pub async fn get_translation_entities(
        &self,
        original_message_id: i32,
    ) -> Result<Vec<entity::message::Model>, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::OriginalMessageId.eq(original_message_id))
            .all(self.db)
            .await
    }

    /// Gets the tag IDs attached to a message
    pub async fn get_tag_ids(&self, message_id: i32) -> Result<Vec<i32>, DbErr> {
        let links = entity::prelude::MessageTag::find()
            .filter(entity::message_tag::Column::MessageId.eq(message_id))
            .all(self.db)
            .await?;

        Ok(links.into_iter().map(|link| link.tag_id).collect())
    }

    /// Updates a message's content, language, and original reference, and
    /// replaces its tag join rows
    pub async fn update(
        &self,
        params: UpdateMessageParams,
    ) -> Result<entity::message::Model, DbErr> {
        let message = entity::prelude::Message::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Message with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::message::ActiveModel = message.into();
        active_model.content = ActiveValue::Set(params.content);
        active_model.language_id = ActiveValue::Set(params.language_id);
        active_model.original_message_id = ActiveValue::Set(params.original_message_id);
        active_model.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let updated = active_model.update(self.db).await?;

        self.set_tags(params.id, params.tag_ids).await?;

        Ok(updated)
    }

    /// Replaces a message's tag join rows with the given tag IDs
    pub async fn set_tags(&self, message_id: i32, tag_ids: Vec<i32>) -> Result<(), DbErr> {
        entity::prelude::MessageTag::delete_many()
            .filter(entity::message_tag::Column::MessageId.eq(message_id))
            .exec(self.db)
            .await?;

        for tag_id in tag_ids {
            entity::message_tag::ActiveModel {
                message_id: ActiveValue::Set(message_id),
                tag_id: ActiveValue::Set(tag_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Deletes a message; translations and tag join rows are removed by the
    /// foreign key cascades
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Message::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn tags_of(&self, message: &entity::message::Model) -> Result<Vec<entity::tag::Model>, DbErr> {
        message
            .find_related(entity::prelude::Tag)
            .order_by_asc(entity::tag::Column::Id)
            .all(self.db)
            .await
    }

    async fn with_tags(
        &self,
        messages: Vec<(entity::message::Model, Option<entity::language::Model>)>,
    ) -> Result<Vec<MessageWithRelations>, DbErr> {
        let mut results = Vec::new();
        for (message, language) in messages {
            let tags = self.tags_of(&message).await?;
            results.push(MessageWithRelations {
                message,
                language,
                tags,
            });
        }

        Ok(results)
    }
}
