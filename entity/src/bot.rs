use sea_orm::entity::prelude::*;

/// A stored bot document.
///
/// `id` is the storage-only surrogate key and also defines store order. `bot_uuid` is the
/// client-supplied identifier and is deliberately not unique at this layer.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub bot_uuid: Uuid,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
