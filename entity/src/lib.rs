//! SeaORM entities backing the bot and message collections.

pub mod prelude;

pub mod bot;
pub mod message;
