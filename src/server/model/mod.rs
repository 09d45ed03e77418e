//! Domain records and the schemas that transcode them to and from the wire.

pub mod bot;
pub mod message;
pub mod schema;
