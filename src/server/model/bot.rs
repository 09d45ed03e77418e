//! Domain model for bots
//!
//! Defines the bot record, its wire field mapping, and conversions from the stored
//! entity and into an insertable active model.

use sea_orm::ActiveValue;
use uuid::Uuid;

use crate::server::model::schema::{
    FieldKind, FieldMapping, FieldSet, FieldValue, Schema, ValidationError,
};

/// The bot domain model
///
/// `bot_uuid` is chosen by the client at registration and is the only identifier exposed
/// over HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bot {
    pub bot_uuid: Uuid,
    pub name: String,
}

impl Bot {
    /// Converts a stored entity into the domain model, dropping the storage key
    pub fn from_entity(entity: entity::bot::Model) -> Self {
        Self {
            bot_uuid: entity.bot_uuid,
            name: entity.name,
        }
    }

    /// Converts the domain model into a new document ready for insertion
    pub fn into_active_model(self) -> entity::bot::ActiveModel {
        entity::bot::ActiveModel {
            id: ActiveValue::NotSet,
            bot_uuid: ActiveValue::Set(self.bot_uuid),
            name: ActiveValue::Set(self.name),
        }
    }
}

impl Schema for Bot {
    const FIELDS: &'static [FieldMapping] = &[
        FieldMapping::new("id", "bot_uuid", FieldKind::Uuid),
        FieldMapping::new("name", "name", FieldKind::Text),
    ];

    fn from_fields(mut fields: FieldSet) -> Result<Self, ValidationError> {
        Ok(Self {
            bot_uuid: fields.take_uuid("bot_uuid")?,
            name: fields.take_text("name")?,
        })
    }

    fn to_fields(&self) -> FieldSet {
        FieldSet::new()
            .with("bot_uuid", FieldValue::Uuid(self.bot_uuid))
            .with("name", FieldValue::Text(self.name.clone()))
    }
}
