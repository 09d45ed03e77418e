use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bot::Table)
                    .if_not_exists()
                    .col(pk_auto(Bot::Id))
                    .col(uuid(Bot::BotUuid))
                    .col(string(Bot::Name))
                    .to_owned(),
            )
            .await?;

        // Lookup index only, duplicate registration is rejected by the bot handlers
        manager
            .create_index(
                Index::create()
                    .name("idx_bot_bot_uuid")
                    .table(Bot::Table)
                    .col(Bot::BotUuid)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bot {
    Table,
    Id,
    BotUuid,
    Name,
}
