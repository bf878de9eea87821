//! Outbound ports - Interfaces that the application requires from the store

mod store_port;

pub use store_port::{AdventureRepositoryPort, CharacterRepositoryPort, StoreHealthPort};
