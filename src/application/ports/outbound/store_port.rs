//! Store ports - Interfaces for the bot's relational store
//!
//! These traits define the read-only contracts that persistence adapters
//! must implement. Application services depend on these traits, not on
//! concrete implementations. Nothing here ever writes.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::{Adventure, Character, EquipmentItem, Spell};
use crate::domain::value_objects::{AdventureId, CharacterId, UserId};

/// Repository port for adventure listings and rosters
#[async_trait]
pub trait AdventureRepositoryPort: Send + Sync {
    /// List active adventures with their participant counts, newest first
    async fn list_active(&self) -> Result<Vec<Adventure>>;

    /// Base character rows for an adventure's party, ordered by name
    async fn party_members(&self, adventure_id: AdventureId) -> Result<Vec<Character>>;
}

/// Repository port for character lookups and their dependent collections
#[async_trait]
pub trait CharacterRepositoryPort: Send + Sync {
    /// Get an active character by id
    async fn get_active(&self, id: CharacterId) -> Result<Option<Character>>;

    /// Get the user's most recently created active character
    async fn latest_active_for_user(&self, user_id: UserId) -> Result<Option<Character>>;

    /// Skill names for a character (unordered)
    async fn skills(&self, id: CharacterId) -> Result<Vec<String>>;

    /// Equipment rows for a character, with the armor/weapon union resolved
    async fn equipment(&self, id: CharacterId) -> Result<Vec<EquipmentItem>>;

    /// Spells known by a character, ordered by (level, name)
    async fn spells(&self, id: CharacterId) -> Result<Vec<Spell>>;
}

/// Liveness probe against the store
#[async_trait]
pub trait StoreHealthPort: Send + Sync {
    async fn ping(&self) -> Result<()>;
}
