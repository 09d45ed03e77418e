//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test documents with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let bot = factory::create_bot(&db).await?;
//!     let message = factory::create_message(&db, conversation_uuid).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let bot = factory::bot::BotFactory::new(&db)
//!     .bot_uuid(bot_uuid)
//!     .name("Aureo")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `bot` - Create bot documents
//! - `message` - Create message documents
//! - `helpers` - Identifier generation shared by all factories

pub mod bot;
pub mod helpers;
pub mod message;

// Re-export commonly used factory functions for concise usage
pub use bot::create_bot;
pub use message::create_message;
