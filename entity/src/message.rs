use sea_orm::entity::prelude::*;

/// A stored message document.
///
/// Messages are append-only; `message_uuid` carries no uniqueness constraint.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub message_uuid: Uuid,
    pub conversation_uuid: Uuid,
    pub timestamp: DateTimeUtc,
    pub sender_uuid: Uuid,
    pub receiver_uuid: Uuid,
    #[sea_orm(column_type = "Text")]
    pub text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
