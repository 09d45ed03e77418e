//! Bot fixtures for creating in-memory test data.

use entity::bot;
use serde_json::{json, Value};
use uuid::Uuid;

/// Default test bot identifier.
pub const DEFAULT_BOT_UUID: &str = "36b9f842-ee97-11e8-9443-0242ac120002";

/// Default test bot name.
pub const DEFAULT_NAME: &str = "Aureo";

/// Parsed form of [`DEFAULT_BOT_UUID`].
pub fn bot_uuid() -> Uuid {
    Uuid::parse_str(DEFAULT_BOT_UUID).unwrap()
}

/// Creates a bot entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - bot_uuid: `36b9f842-ee97-11e8-9443-0242ac120002`
/// - name: `"Aureo"`
pub fn entity() -> bot::Model {
    bot::Model {
        id: 1,
        bot_uuid: bot_uuid(),
        name: DEFAULT_NAME.to_string(),
    }
}

/// The default bot in its wire representation.
///
/// # Example
///
/// ```rust,ignore
/// let mut payload = fixture::bot::wire();
/// payload["name"] = json!("Renamed");
/// ```
pub fn wire() -> Value {
    json!({
        "id": DEFAULT_BOT_UUID,
        "name": DEFAULT_NAME,
    })
}
