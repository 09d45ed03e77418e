//! Document store adapters for the bot and message collections.
//!
//! Repositories expose filter-based find, insert, update, and delete operations over
//! SeaORM entities and hand back domain records. Store order is insertion order, tracked
//! by each collection's storage-only surrogate key. Nothing here is transactional: a find
//! followed by a write can interleave with other requests.

pub mod bot;
pub mod message;

#[cfg(test)]
mod test;
