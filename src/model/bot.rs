use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BotDto {
    #[schema(format = Uuid, example = "36b9f842-ee97-11e8-9443-0242ac120002")]
    pub id: String,
    #[schema(example = "Aureo")]
    pub name: String,
}
