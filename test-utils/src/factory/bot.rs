//! Bot factory for creating test bot documents.

use crate::factory::helpers::{next_id, next_uuid};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test bots with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::bot::BotFactory;
///
/// let bot = BotFactory::new(&db)
///     .name("Aureo")
///     .build()
///     .await?;
/// ```
pub struct BotFactory<'a> {
    db: &'a DatabaseConnection,
    bot_uuid: Uuid,
    name: String,
}

impl<'a> BotFactory<'a> {
    /// Creates a new BotFactory with default values.
    ///
    /// Defaults:
    /// - bot_uuid: unique UUID from the shared counter
    /// - name: `"Bot {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            bot_uuid: next_uuid(),
            name: format!("Bot {}", id),
        }
    }

    /// Sets the client-supplied bot identifier.
    pub fn bot_uuid(mut self, bot_uuid: Uuid) -> Self {
        self.bot_uuid = bot_uuid;
        self
    }

    /// Sets the bot name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the bot document into the database.
    ///
    /// # Returns
    /// - `Ok(entity::bot::Model)` - Created bot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::bot::Model, DbErr> {
        entity::bot::ActiveModel {
            id: ActiveValue::NotSet,
            bot_uuid: ActiveValue::Set(self.bot_uuid),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a bot with default values.
///
/// Shorthand for `BotFactory::new(db).build().await`.
pub async fn create_bot(db: &DatabaseConnection) -> Result<entity::bot::Model, DbErr> {
    BotFactory::new(db).build().await
}
