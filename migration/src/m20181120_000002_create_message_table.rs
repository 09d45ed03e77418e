use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Message::Table)
                    .if_not_exists()
                    .col(pk_auto(Message::Id))
                    .col(uuid(Message::MessageUuid))
                    .col(uuid(Message::ConversationUuid))
                    .col(timestamp_with_time_zone(Message::Timestamp))
                    .col(uuid(Message::SenderUuid))
                    .col(uuid(Message::ReceiverUuid))
                    .col(text(Message::Text))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_message_message_uuid")
                    .table(Message::Table)
                    .col(Message::MessageUuid)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_message_conversation_uuid")
                    .table(Message::Table)
                    .col(Message::ConversationUuid)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Message::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Message {
    Table,
    Id,
    MessageUuid,
    ConversationUuid,
    Timestamp,
    SenderUuid,
    ReceiverUuid,
    Text,
}
