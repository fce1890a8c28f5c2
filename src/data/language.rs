use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::language::{CreateLanguageParams, UpdateLanguageParams};

pub struct LanguageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LanguageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new language
    pub async fn create(
        &self,
        params: CreateLanguageParams,
    ) -> Result<entity::language::Model, DbErr> {
        entity::language::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a language by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::language::Model>, DbErr> {
        entity::prelude::Language::find_by_id(id).one(self.db).await
    }

    /// Gets a language by its exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::language::Model>, DbErr> {
        entity::prelude::Language::find()
            .filter(entity::language::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets all languages ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::language::Model>, DbErr> {
        entity::prelude::Language::find()
            .order_by_asc(entity::language::Column::Name)
            .all(self.db)
            .await
    }

    /// Updates a language's name
    pub async fn update(
        &self,
        params: UpdateLanguageParams,
    ) -> Result<entity::language::Model, DbErr> {
        let language = entity::prelude::Language::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Language with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::language::ActiveModel = language.into();
        active_model.name = ActiveValue::Set(params.name);

        active_model.update(self.db).await
    }

    /// Deletes a language
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Language::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts the messages written in a language
    pub async fn message_count(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::LanguageId.eq(id))
            .count(self.db)
            .await
    }
}
