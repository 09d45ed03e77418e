//! Bot data repository for database operations
//!
//! Provides the `BotRepository` for managing bot documents. Every operation selects
//! documents through a [`BotFilter`] and converts stored entities into the [`Bot`] domain
//! model for usage within services & controllers.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::bot::Bot;

/// Selects bot documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotFilter {
    /// Every bot in the collection
    All,
    /// Bots registered under the given client-supplied id
    BotUuid(Uuid),
}

impl From<BotFilter> for Condition {
    fn from(filter: BotFilter) -> Self {
        match filter {
            BotFilter::All => Condition::all(),
            BotFilter::BotUuid(bot_uuid) => {
                Condition::all().add(entity::bot::Column::BotUuid.eq(bot_uuid))
            }
        }
    }
}

/// Repository providing database operations for bot management.
pub struct BotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotRepository<'a> {
    /// Creates a new BotRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn first_entity(&self, filter: BotFilter) -> Result<Option<entity::bot::Model>, DbErr> {
        entity::prelude::Bot::find()
            .filter(Condition::from(filter))
            .order_by_asc(entity::bot::Column::Id)
            .one(self.db)
            .await
    }

    /// Finds the first bot matching the filter in store order
    ///
    /// # Returns
    /// - `Ok(Some(Bot))` - The first matching bot
    /// - `Ok(None)` - No bot matches
    /// - `Err(DbErr)` - Database error during lookup
    pub async fn find_one(&self, filter: BotFilter) -> Result<Option<Bot>, DbErr> {
        let bot = self.first_entity(filter).await?;

        Ok(bot.map(Bot::from_entity))
    }

    /// Finds every bot matching the filter in store order
    pub async fn find(&self, filter: BotFilter) -> Result<Vec<Bot>, DbErr> {
        let bots = entity::prelude::Bot::find()
            .filter(Condition::from(filter))
            .order_by_asc(entity::bot::Column::Id)
            .all(self.db)
            .await?;

        Ok(bots.into_iter().map(Bot::from_entity).collect())
    }

    /// Inserts a bot document
    ///
    /// No uniqueness check is made on `bot_uuid`; callers that need one must look it up
    /// first.
    ///
    /// # Returns
    /// - `Ok(Bot)` - The stored bot
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_one(&self, bot: Bot) -> Result<Bot, DbErr> {
        let model = bot.into_active_model().insert(self.db).await?;

        Ok(Bot::from_entity(model))
    }

    /// Inserts several bot documents, preserving their order in the store
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of inserted documents
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_many(&self, bots: Vec<Bot>) -> Result<u64, DbErr> {
        let mut inserted = 0;
        for bot in bots {
            bot.into_active_model().insert(self.db).await?;
            inserted += 1;
        }

        Ok(inserted)
    }

    /// Sets every field of `fields` on the first bot matching the filter
    ///
    /// The stored `bot_uuid` is overwritten too, so a bot may be re-keyed by an update.
    ///
    /// # Returns
    /// - `Ok(Some(Bot))` - The bot after the update
    /// - `Ok(None)` - No bot matches, nothing was written
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_one(&self, filter: BotFilter, fields: Bot) -> Result<Option<Bot>, DbErr> {
        let Some(bot) = self.first_entity(filter).await? else {
            return Ok(None);
        };

        let mut active_model: entity::bot::ActiveModel = bot.into();
        active_model.bot_uuid = ActiveValue::Set(fields.bot_uuid);
        active_model.name = ActiveValue::Set(fields.name);

        let model = active_model.update(self.db).await?;

        Ok(Some(Bot::from_entity(model)))
    }

    /// Deletes the first bot matching the filter
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted documents, `0` or `1`
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_one(&self, filter: BotFilter) -> Result<u64, DbErr> {
        let Some(bot) = self.first_entity(filter).await? else {
            return Ok(0);
        };

        let result = bot.delete(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Deletes every bot matching the filter
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted documents
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_many(&self, filter: BotFilter) -> Result<u64, DbErr> {
        let result = entity::prelude::Bot::delete_many()
            .filter(Condition::from(filter))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
