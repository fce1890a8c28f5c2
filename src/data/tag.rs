use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::tag::{CreateTagParams, UpdateTagParams};

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new tag
    pub async fn create(&self, params: CreateTagParams) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a tag by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find_by_id(id).one(self.db).await
    }

    /// Gets a tag by its exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets all tags ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await
    }

    /// Updates a tag's name
    pub async fn update(&self, params: UpdateTagParams) -> Result<entity::tag::Model, DbErr> {
        let tag = entity::prelude::Tag::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Tag with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::tag::ActiveModel = tag.into();
        active_model.name = ActiveValue::Set(params.name);

        active_model.update(self.db).await
    }

    /// Deletes a tag; join rows to messages are removed by the cascade
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Tag::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
