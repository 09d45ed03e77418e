//! Domain model for messages

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue;
use uuid::Uuid;

use crate::server::model::schema::{
    FieldKind, FieldMapping, FieldSet, FieldValue, Schema, ValidationError,
};

/// The message domain model
///
/// A message is sent from one party to another inside a conversation. Messages are
/// append-only and their identifier is not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message_uuid: Uuid,
    pub conversation_uuid: Uuid,
    pub timestamp: DateTime<Utc>,
    pub sender_uuid: Uuid,
    pub receiver_uuid: Uuid,
    pub text: String,
}

impl Message {
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            message_uuid: entity.message_uuid,
            conversation_uuid: entity.conversation_uuid,
            timestamp: entity.timestamp,
            sender_uuid: entity.sender_uuid,
            receiver_uuid: entity.receiver_uuid,
            text: entity.text,
        }
    }

    pub fn into_active_model(self) -> entity::message::ActiveModel {
        entity::message::ActiveModel {
            id: ActiveValue::NotSet,
            message_uuid: ActiveValue::Set(self.message_uuid),
            conversation_uuid: ActiveValue::Set(self.conversation_uuid),
            timestamp: ActiveValue::Set(self.timestamp),
            sender_uuid: ActiveValue::Set(self.sender_uuid),
            receiver_uuid: ActiveValue::Set(self.receiver_uuid),
            text: ActiveValue::Set(self.text),
        }
    }
}

impl Schema for Message {
    const FIELDS: &'static [FieldMapping] = &[
        FieldMapping::new("id", "message_uuid", FieldKind::Uuid),
        FieldMapping::new("conversationId", "conversation_uuid", FieldKind::Uuid),
        FieldMapping::new("timestamp", "timestamp", FieldKind::Timestamp),
        FieldMapping::new("from", "sender_uuid", FieldKind::Uuid),
        FieldMapping::new("to", "receiver_uuid", FieldKind::Uuid),
        FieldMapping::new("text", "text", FieldKind::Text),
    ];

    fn from_fields(mut fields: FieldSet) -> Result<Self, ValidationError> {
        Ok(Self {
            message_uuid: fields.take_uuid("message_uuid")?,
            conversation_uuid: fields.take_uuid("conversation_uuid")?,
            timestamp: fields.take_timestamp("timestamp")?,
            sender_uuid: fields.take_uuid("sender_uuid")?,
            receiver_uuid: fields.take_uuid("receiver_uuid")?,
            text: fields.take_text("text")?,
        })
    }

    fn to_fields(&self) -> FieldSet {
        FieldSet::new()
            .with("message_uuid", FieldValue::Uuid(self.message_uuid))
            .with("conversation_uuid", FieldValue::Uuid(self.conversation_uuid))
            .with("timestamp", FieldValue::Timestamp(self.timestamp))
            .with("sender_uuid", FieldValue::Uuid(self.sender_uuid))
            .with("receiver_uuid", FieldValue::Uuid(self.receiver_uuid))
            .with("text", FieldValue::Text(self.text.clone()))
    }
}
