//! Field-mapping schemas translating between wire payloads and domain records
//!
//! Each record type declares a fixed table of [`FieldMapping`]s pairing a wire key with
//! an internal field name and a [`FieldKind`]. Decoding walks the table over a JSON object,
//! parsing every required field and collecting one [`ValidationError`] for all failures.
//! Keys missing from the table are ignored. Encoding walks the same table in reverse, so the
//! wire shape only ever contains mapped fields.

use std::{collections::BTreeMap, fmt};

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::server::util::parse::{format_timestamp, parse_timestamp, validate_uuid};

pub const MISSING_FIELD: &str = "Missing data for required field.";
pub const NULL_FIELD: &str = "Field may not be null.";
pub const INVALID_UUID: &str = "Not a valid UUID.";
pub const INVALID_STRING: &str = "Not a valid string.";
pub const INVALID_DATETIME: &str = "Not a valid datetime.";
pub const INVALID_INPUT: &str = "Invalid input type.";

/// Key under which errors about the payload as a whole are reported
pub const SCHEMA_KEY: &str = "_schema";

/// How a mapped field is represented on the wire and parsed into the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Canonical UUID string
    Uuid,
    /// Plain JSON string
    Text,
    /// Microsecond UTC timestamp string
    Timestamp,
}

/// One row of a record's wire/internal mapping table.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub wire: &'static str,
    pub internal: &'static str,
    pub kind: FieldKind,
}

impl FieldMapping {
    pub const fn new(wire: &'static str, internal: &'static str, kind: FieldKind) -> Self {
        Self {
            wire,
            internal,
            kind,
        }
    }
}

/// A parsed field value keyed by its internal name inside a [`FieldSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Uuid(Uuid),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl FieldKind {
    fn parse(self, value: &Value) -> Result<FieldValue, &'static str> {
        match (self, value) {
            (_, Value::Null) => Err(NULL_FIELD),
            (FieldKind::Uuid, Value::String(raw)) => {
                validate_uuid(raw).map(FieldValue::Uuid).ok_or(INVALID_UUID)
            }
            (FieldKind::Uuid, _) => Err(INVALID_UUID),
            (FieldKind::Text, Value::String(text)) => Ok(FieldValue::Text(text.clone())),
            (FieldKind::Text, _) => Err(INVALID_STRING),
            (FieldKind::Timestamp, Value::String(raw)) => parse_timestamp(raw)
                .map(FieldValue::Timestamp)
                .ok_or(INVALID_DATETIME),
            (FieldKind::Timestamp, _) => Err(INVALID_DATETIME),
        }
    }
}

impl FieldValue {
    fn format(&self) -> Value {
        match self {
            FieldValue::Uuid(uuid) => Value::String(uuid.hyphenated().to_string()),
            FieldValue::Text(text) => Value::String(text.clone()),
            FieldValue::Timestamp(timestamp) => Value::String(format_timestamp(timestamp)),
        }
    }
}

/// Typed field values keyed by internal field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet(BTreeMap<&'static str, FieldValue>);

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, internal: &'static str, value: FieldValue) -> Self {
        self.0.insert(internal, value);
        self
    }

    pub fn get(&self, internal: &str) -> Option<&FieldValue> {
        self.0.get(internal)
    }

    pub fn take_uuid(&mut self, internal: &'static str) -> Result<Uuid, ValidationError> {
        match self.0.remove(internal) {
            Some(FieldValue::Uuid(uuid)) => Ok(uuid),
            Some(_) => Err(ValidationError::single(internal, INVALID_UUID)),
            None => Err(ValidationError::single(internal, MISSING_FIELD)),
        }
    }

    pub fn take_text(&mut self, internal: &'static str) -> Result<String, ValidationError> {
        match self.0.remove(internal) {
            Some(FieldValue::Text(text)) => Ok(text),
            Some(_) => Err(ValidationError::single(internal, INVALID_STRING)),
            None => Err(ValidationError::single(internal, MISSING_FIELD)),
        }
    }

    pub fn take_timestamp(
        &mut self,
        internal: &'static str,
    ) -> Result<DateTime<Utc>, ValidationError> {
        match self.0.remove(internal) {
            Some(FieldValue::Timestamp(timestamp)) => Ok(timestamp),
            Some(_) => Err(ValidationError::single(internal, INVALID_DATETIME)),
            None => Err(ValidationError::single(internal, MISSING_FIELD)),
        }
    }
}

/// Every problem found while decoding a payload, grouped by wire key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    messages: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn single(key: impl Into<String>, message: impl Into<String>) -> Self {
        let mut error = Self::default();
        error.push(key, message);
        error
    }

    pub fn push(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages
            .entry(key.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages reported for `key`, empty when the key is valid.
    pub fn messages(&self, key: &str) -> &[String] {
        self.messages.get(key).map(Vec::as_slice).unwrap_or_default()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, messages) in &self.messages {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}: {}", key, messages.join(" "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// A record with a fixed wire/internal field-mapping table.
pub trait Schema: Sized {
    /// The mapping table, in wire output order.
    const FIELDS: &'static [FieldMapping];

    /// Builds the record from fields that already passed parsing.
    fn from_fields(fields: FieldSet) -> Result<Self, ValidationError>;

    /// Breaks the record into its internal fields.
    fn to_fields(&self) -> FieldSet;

    /// Decodes a wire payload.
    ///
    /// Fails when the payload is not a JSON object or when any mapped field is absent or
    /// unparsable. Unmapped keys are dropped.
    fn decode(wire: &Value) -> Result<Self, ValidationError> {
        let Value::Object(object) = wire else {
            return Err(ValidationError::single(SCHEMA_KEY, INVALID_INPUT));
        };

        let mut errors = ValidationError::default();
        let mut fields = FieldSet::new();

        for mapping in Self::FIELDS {
            match object.get(mapping.wire) {
                None => errors.push(mapping.wire, MISSING_FIELD),
                Some(value) => match mapping.kind.parse(value) {
                    Ok(parsed) => fields = fields.with(mapping.internal, parsed),
                    Err(message) => errors.push(mapping.wire, message),
                },
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Self::from_fields(fields)
    }

    /// Encodes the record into its wire payload.
    fn encode(&self) -> Value {
        let fields = self.to_fields();
        let mut object = Map::new();

        for mapping in Self::FIELDS {
            if let Some(value) = fields.get(mapping.internal) {
                object.insert(mapping.wire.to_string(), value.format());
            }
        }

        Value::Object(object)
    }
}
