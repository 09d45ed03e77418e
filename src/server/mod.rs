//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite as the document
//! store for the bot and message collections.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, parameter validation, status codes
//! - **Service Layer** (`service/`) - Business rules such as duplicate registration checks
//! - **Data Layer** (`data/`) - Filter-based document operations over SeaORM entities
//! - **Model Layer** (`model/`) - Domain records and their wire field-mapping schemas
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** validates identifiers and decodes the body through the record schema
//! 3. **Service** applies the resource's rules and calls the repository
//! 4. **Data** queries or mutates the collection and returns domain records
//! 5. **Controller** encodes the record back to the wire and picks the status code

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
