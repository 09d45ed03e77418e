use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    #[schema(format = Uuid, example = "67ade836-ea2e-4992-a7c2-f04b696dc9ff")]
    pub id: String,
    #[serde(rename = "conversationId")]
    #[schema(format = Uuid, example = "7665ada8-3448-4acd-a1b7-d688e68fe9a1")]
    pub conversation_id: String,
    /// UTC timestamp with microsecond precision
    #[schema(example = "2018-11-16T23:30:57.000000Z")]
    pub timestamp: String,
    /// Sender id
    #[schema(format = Uuid)]
    pub from: String,
    /// Receiver id
    #[schema(format = Uuid)]
    pub to: String,
    pub text: String,
}
