use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000002_create_tag_table::Tag, m20260110_000003_create_message_table::Message,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MessageTag::Table)
                    .if_not_exists()
                    .col(integer(MessageTag::MessageId))
                    .col(integer(MessageTag::TagId))
                    .primary_key(
                        Index::create()
                            .col(MessageTag::MessageId)
                            .col(MessageTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_tag_message_id")
                            .from(MessageTag::Table, MessageTag::MessageId)
                            .to(Message::Table, Message::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_tag_tag_id")
                            .from(MessageTag::Table, MessageTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MessageTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MessageTag {
    Table,
    MessageId,
    TagId,
}
