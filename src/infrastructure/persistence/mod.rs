//! Persistence - Read-only adapters over the bot's store
//!
//! `MySql*Repository` adapters run against the live MySQL database;
//! `MemoryStore` is a fixture-backed adapter for tests and local
//! experiments. Both implement the same outbound ports.

mod adventure_repository;
mod character_repository;
mod connection;
mod memory_store;

pub use adventure_repository::MySqlAdventureRepository;
pub use character_repository::MySqlCharacterRepository;
pub use connection::{connect, MySqlStoreHealth};
pub use memory_store::{CharacterBuilder, MemoryStore};
