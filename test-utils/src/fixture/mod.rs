//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory entity models and wire
//! payloads for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // In-memory entity model (no DB)
//! let bot = fixture::bot::entity();
//!
//! // The same bot as a client would send it
//! let payload = fixture::bot::wire();
//! ```

pub mod bot;
pub mod message;
