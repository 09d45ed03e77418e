//! Bot API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the bot API.
//! This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Inserts bot and message documents with sensible defaults
//! - **fixture**: In-memory entity models and wire payloads, no database involved
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Bot;
//!
//! #[tokio::test]
//! async fn test_bot_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Bot)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
