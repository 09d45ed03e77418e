//! Message data repository for database operations
//!
//! Provides the `MessageRepository` for the append-only message collection. There is no
//! update path; deletion exists for clearing whole conversations or the collection.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::message::Message;

/// Selects message documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFilter {
    /// Every message in the collection
    All,
    /// Messages stored under the given client-supplied id
    MessageUuid(Uuid),
    /// Messages belonging to the given conversation
    ConversationUuid(Uuid),
}

impl From<MessageFilter> for Condition {
    fn from(filter: MessageFilter) -> Self {
        match filter {
            MessageFilter::All => Condition::all(),
            MessageFilter::MessageUuid(message_uuid) => {
                Condition::all().add(entity::message::Column::MessageUuid.eq(message_uuid))
            }
            MessageFilter::ConversationUuid(conversation_uuid) => Condition::all()
                .add(entity::message::Column::ConversationUuid.eq(conversation_uuid)),
        }
    }
}

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the first message matching the filter in store order
    pub async fn find_one(&self, filter: MessageFilter) -> Result<Option<Message>, DbErr> {
        let message = entity::prelude::Message::find()
            .filter(Condition::from(filter))
            .order_by_asc(entity::message::Column::Id)
            .one(self.db)
            .await?;

        Ok(message.map(Message::from_entity))
    }

    /// Finds every message matching the filter in store order
    pub async fn find(&self, filter: MessageFilter) -> Result<Vec<Message>, DbErr> {
        let messages = entity::prelude::Message::find()
            .filter(Condition::from(filter))
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        Ok(messages.into_iter().map(Message::from_entity).collect())
    }

    /// Appends a message, duplicates of an existing `message_uuid` included
    pub async fn insert_one(&self, message: Message) -> Result<Message, DbErr> {
        let model = message.into_active_model().insert(self.db).await?;

        Ok(Message::from_entity(model))
    }

    /// Appends several messages in order, returning how many were inserted
    pub async fn insert_many(&self, messages: Vec<Message>) -> Result<u64, DbErr> {
        let mut inserted = 0;
        for message in messages {
            message.into_active_model().insert(self.db).await?;
            inserted += 1;
        }

        Ok(inserted)
    }

    /// Deletes every message matching the filter, returning how many were removed
    pub async fn delete_many(&self, filter: MessageFilter) -> Result<u64, DbErr> {
        let result = entity::prelude::Message::delete_many()
            .filter(Condition::from(filter))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
