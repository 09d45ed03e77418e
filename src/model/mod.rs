//! Wire-level shapes exchanged over HTTP.
//!
//! These types document the JSON contract in the OpenAPI output and give tests a typed view
//! of response bodies. Request decoding does not go through them: payloads are validated by
//! the field-mapping schemas in `server::model`.

pub mod api;
pub mod bot;
pub mod message;
