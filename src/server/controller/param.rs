use axum::{extract::rejection::JsonRejection, Json};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::server::{error::AppError, util::parse::validate_uuid};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConversationParam {
    /// Conversation whose messages are listed
    #[serde(rename = "conversationId")]
    #[param(required = true)]
    pub conversation_id: Option<String>,
}

impl ConversationParam {
    const KEY: &'static str = "conversationId";

    /// Builds the parameter from raw query pairs
    ///
    /// Only the first `conversationId` occurrence counts, later repeats are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let conversation_id = pairs
            .into_iter()
            .find(|(key, _)| key == Self::KEY)
            .map(|(_, value)| value);

        Self { conversation_id }
    }
}

/// Unwraps a JSON request body
///
/// A missing, mistyped, or unparsable body becomes `Value::Null`, which every record schema
/// rejects as invalid input. Handlers therefore answer 400 with the schema error instead of
/// axum's own rejection response.
pub fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Value {
    match payload {
        Ok(Json(value)) => value,
        Err(rejection) => {
            tracing::debug!("Unreadable JSON body: {}", rejection.body_text());
            Value::Null
        }
    }
}

/// Parses a path or query identifier, failing with `message` when it is not a canonical UUID
pub fn parse_uuid_param(raw: &str, message: &str) -> Result<Uuid, AppError> {
    validate_uuid(raw).ok_or_else(|| AppError::BadRequest(message.to_string()))
}
