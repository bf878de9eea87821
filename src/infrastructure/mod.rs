//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: MySQL adapters over the bot's store (plus an in-memory
//!   fixture store for tests)
//! - HTTP: REST API routes and error mapping
//! - Config: Application configuration from the environment
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod persistence;
pub mod state;
