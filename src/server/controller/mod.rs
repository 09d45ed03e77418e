//! HTTP handlers for the bot and message resources.
//!
//! Handlers validate path and query parameters, transcode bodies through the record
//! schemas, call the matching service, and pick the response status.

pub mod bot;
pub mod message;
pub mod param;
