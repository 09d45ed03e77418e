//! Message factory for creating test message documents.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::{factory::helpers::next_uuid, fixture};

/// Factory for creating test messages with customizable fields.
///
/// Every message belongs to a conversation, so the conversation identifier is
/// required up front while all other fields default.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::message::MessageFactory;
///
/// let message = MessageFactory::new(&db, conversation_uuid)
///     .text("Gostaria de saber meu saldo")
///     .build()
///     .await?;
/// ```
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    message_uuid: Uuid,
    conversation_uuid: Uuid,
    timestamp: DateTime<Utc>,
    sender_uuid: Uuid,
    receiver_uuid: Uuid,
    text: String,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - message_uuid, sender_uuid, receiver_uuid: unique UUIDs from the shared counter
    /// - timestamp: the fixture timestamp
    /// - text: the fixture text
    pub fn new(db: &'a DatabaseConnection, conversation_uuid: Uuid) -> Self {
        Self {
            db,
            message_uuid: next_uuid(),
            conversation_uuid,
            timestamp: fixture::message::timestamp(),
            sender_uuid: next_uuid(),
            receiver_uuid: next_uuid(),
            text: fixture::message::DEFAULT_TEXT.to_string(),
        }
    }

    /// Sets the client-supplied message identifier.
    pub fn message_uuid(mut self, message_uuid: Uuid) -> Self {
        self.message_uuid = message_uuid;
        self
    }

    /// Sets the message timestamp.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Sets the message text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builds and inserts the message document into the database.
    ///
    /// # Returns
    /// - `Ok(entity::message::Model)` - Created message entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            id: ActiveValue::NotSet,
            message_uuid: ActiveValue::Set(self.message_uuid),
            conversation_uuid: ActiveValue::Set(self.conversation_uuid),
            timestamp: ActiveValue::Set(self.timestamp),
            sender_uuid: ActiveValue::Set(self.sender_uuid),
            receiver_uuid: ActiveValue::Set(self.receiver_uuid),
            text: ActiveValue::Set(self.text),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a message with default values in the given conversation.
///
/// Shorthand for `MessageFactory::new(db, conversation_uuid).build().await`.
pub async fn create_message(
    db: &DatabaseConnection,
    conversation_uuid: Uuid,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, conversation_uuid).build().await
}
