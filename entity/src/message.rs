use sea_orm::entity::prelude::*;

/// A message row. `original_message_id` is `None` for an original message
/// and points at the original for a translation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub language_id: i32,
    pub original_message_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::language::Entity",
        from = "Column::LanguageId",
        to = "super::language::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Language,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::OriginalMessageId",
        to = "Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    OriginalMessage,
    #[sea_orm(has_many = "super::message_tag::Entity")]
    MessageTag,
}

impl Related<super::language::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Language.def()
    }
}

impl Related<super::message_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MessageTag.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::message_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::message_tag::Relation::Message.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
