use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::message::{MessageFilter, MessageRepository},
    error::AppError,
    model::message::Message,
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a message
    ///
    /// Unlike bots, message ids are not checked for duplicates.
    pub async fn create(&self, message: Message) -> Result<Message, AppError> {
        let message = MessageRepository::new(self.db).insert_one(message).await?;

        tracing::info!(
            "Stored message {} in conversation {}",
            message.message_uuid,
            message.conversation_uuid
        );

        Ok(message)
    }

    /// Gets the first stored message with the given id
    ///
    /// # Returns
    /// - `Ok(Message)` - The stored message
    /// - `Err(AppError::NotFound)` - No message with that id
    pub async fn get(&self, message_uuid: Uuid) -> Result<Message, AppError> {
        MessageRepository::new(self.db)
            .find_one(MessageFilter::MessageUuid(message_uuid))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No message with id {}", message_uuid)))
    }

    /// Lists a conversation's messages in store order
    ///
    /// # Returns
    /// - `Ok(Vec<Message>)` - At least one message
    /// - `Err(AppError::NotFound)` - The conversation has no messages
    pub async fn list_by_conversation(
        &self,
        conversation_uuid: Uuid,
    ) -> Result<Vec<Message>, AppError> {
        let messages = MessageRepository::new(self.db)
            .find(MessageFilter::ConversationUuid(conversation_uuid))
            .await?;

        if messages.is_empty() {
            return Err(AppError::NotFound(format!(
                "No messages from conversationId {}",
                conversation_uuid
            )));
        }

        Ok(messages)
    }
}
