//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. Handlers construct their services from it,
//! so tests can run the full router against any database, including in-memory SQLite.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool backing the bot and message collections.
    ///
    /// `DatabaseConnection` is a pool handle, clones share the same pool.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state around an established database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
