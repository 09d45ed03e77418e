use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::bot::{BotFilter, BotRepository},
    error::AppError,
    model::bot::Bot,
};

pub struct BotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new bot
    ///
    /// The existence check and the insert are separate store calls, so two concurrent
    /// registrations of the same id can both succeed.
    ///
    /// # Returns
    /// - `Ok(Bot)` - The registered bot
    /// - `Err(AppError::Conflict)` - A bot with the same id is already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, bot: Bot) -> Result<Bot, AppError> {
        let repo = BotRepository::new(self.db);

        if repo
            .find_one(BotFilter::BotUuid(bot.bot_uuid))
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Bot with id {} already registered",
                bot.bot_uuid
            )));
        }

        let bot = repo.insert_one(bot).await?;

        tracing::info!("Registered bot {}", bot.bot_uuid);

        Ok(bot)
    }

    /// Gets a bot by id
    ///
    /// # Returns
    /// - `Ok(Bot)` - The stored bot
    /// - `Err(AppError::NotFound)` - No bot with that id
    pub async fn get(&self, bot_uuid: Uuid) -> Result<Bot, AppError> {
        BotRepository::new(self.db)
            .find_one(BotFilter::BotUuid(bot_uuid))
            .await?
            .ok_or_else(|| not_found(bot_uuid))
    }

    /// Replaces the fields of the bot stored under `bot_uuid` with `bot`
    ///
    /// `bot.bot_uuid` is written as-is even when it differs from `bot_uuid`.
    ///
    /// # Returns
    /// - `Ok(Bot)` - The bot after the update
    /// - `Err(AppError::NotFound)` - No bot with that id
    pub async fn update(&self, bot_uuid: Uuid, bot: Bot) -> Result<Bot, AppError> {
        let bot = BotRepository::new(self.db)
            .update_one(BotFilter::BotUuid(bot_uuid), bot)
            .await?
            .ok_or_else(|| not_found(bot_uuid))?;

        tracing::info!("Updated bot {}", bot_uuid);

        Ok(bot)
    }

    /// Deletes a bot by id
    ///
    /// # Returns
    /// - `Ok(())` - The bot was deleted
    /// - `Err(AppError::NotFound)` - No bot with that id
    pub async fn delete(&self, bot_uuid: Uuid) -> Result<(), AppError> {
        let repo = BotRepository::new(self.db);

        if repo.find_one(BotFilter::BotUuid(bot_uuid)).await?.is_none() {
            return Err(not_found(bot_uuid));
        }

        repo.delete_one(BotFilter::BotUuid(bot_uuid)).await?;

        tracing::info!("Deleted bot {}", bot_uuid);

        Ok(())
    }
}

fn not_found(bot_uuid: Uuid) -> AppError {
    AppError::NotFound(format!("No bot with id {}", bot_uuid))
}
