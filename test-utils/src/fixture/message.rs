//! Message fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::message;
use serde_json::{json, Value};
use uuid::Uuid;

/// Default test message identifier.
pub const DEFAULT_MESSAGE_UUID: &str = "67ade836-ea2e-4992-a7c2-f04b696dc9ff";

/// Default conversation the test message belongs to.
pub const DEFAULT_CONVERSATION_UUID: &str = "7665ada8-3448-4acd-a1b7-d688e68fe9a1";

/// Default sender of the test message.
pub const DEFAULT_SENDER_UUID: &str = "16edd3b3-3f75-40df-af07-2a3813a79ce9";

/// Default receiver of the test message.
pub const DEFAULT_RECEIVER_UUID: &str = "36b9f842-ee97-11e8-9443-0242ac120002";

/// Default timestamp in wire format.
pub const DEFAULT_TIMESTAMP: &str = "2018-11-16T23:30:57.000000Z";

/// Default message text.
pub const DEFAULT_TEXT: &str = "Gostaria de saber meu saldo";

/// Parsed form of [`DEFAULT_TIMESTAMP`].
pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 11, 16, 23, 30, 57).unwrap()
}

/// Parsed form of [`DEFAULT_CONVERSATION_UUID`].
pub fn conversation_uuid() -> Uuid {
    Uuid::parse_str(DEFAULT_CONVERSATION_UUID).unwrap()
}

/// Creates a message entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - message_uuid: `67ade836-ea2e-4992-a7c2-f04b696dc9ff`
/// - conversation_uuid: `7665ada8-3448-4acd-a1b7-d688e68fe9a1`
/// - timestamp: `2018-11-16T23:30:57Z`
/// - sender_uuid: `16edd3b3-3f75-40df-af07-2a3813a79ce9`
/// - receiver_uuid: `36b9f842-ee97-11e8-9443-0242ac120002`
/// - text: `"Gostaria de saber meu saldo"`
pub fn entity() -> message::Model {
    message::Model {
        id: 1,
        message_uuid: Uuid::parse_str(DEFAULT_MESSAGE_UUID).unwrap(),
        conversation_uuid: conversation_uuid(),
        timestamp: timestamp(),
        sender_uuid: Uuid::parse_str(DEFAULT_SENDER_UUID).unwrap(),
        receiver_uuid: Uuid::parse_str(DEFAULT_RECEIVER_UUID).unwrap(),
        text: DEFAULT_TEXT.to_string(),
    }
}

/// The default message in its wire representation.
pub fn wire() -> Value {
    json!({
        "id": DEFAULT_MESSAGE_UUID,
        "conversationId": DEFAULT_CONVERSATION_UUID,
        "timestamp": DEFAULT_TIMESTAMP,
        "from": DEFAULT_SENDER_UUID,
        "to": DEFAULT_RECEIVER_UUID,
        "text": DEFAULT_TEXT,
    })
}
