//! Character Sheet Service - Aggregates a character with its collections
//!
//! This is the query-composition core: a base character row is fetched
//! through the reference-table join, then the dependent collections (skills,
//! equipment, and spells when the class is spellcasting) are fetched by the
//! same id and attached. Any dependent fetch failing fails the whole
//! operation; there is no partial-result tolerance.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::application::ports::outbound::{AdventureRepositoryPort, CharacterRepositoryPort};
use crate::domain::entities::{Character, CharacterSheet};
use crate::domain::value_objects::{AdventureId, CharacterId, UserId};

/// Character sheet service trait defining the aggregation use cases
#[async_trait]
pub trait CharacterSheetService: Send + Sync {
    /// Full sheets for every member of an adventure's party, ordered by name
    async fn party_sheets(&self, adventure_id: AdventureId) -> Result<Vec<CharacterSheet>>;

    /// Full sheet for one active character; `None` means not found
    async fn character_sheet(&self, id: CharacterId) -> Result<Option<CharacterSheet>>;

    /// Full sheet for the user's most recent active character
    ///
    /// `None` is a valid empty state here (the user simply has no active
    /// character), not a lookup failure.
    async fn active_sheet_for_user(&self, user_id: UserId) -> Result<Option<CharacterSheet>>;
}

/// Default implementation backed by the store ports
pub struct CharacterSheetServiceImpl {
    adventures: Arc<dyn AdventureRepositoryPort>,
    characters: Arc<dyn CharacterRepositoryPort>,
}

impl CharacterSheetServiceImpl {
    pub fn new(
        adventures: Arc<dyn AdventureRepositoryPort>,
        characters: Arc<dyn CharacterRepositoryPort>,
    ) -> Self {
        Self {
            adventures,
            characters,
        }
    }

    /// Attach the dependent collections to a base character row
    ///
    /// Spells are only ever fetched when the class is flagged spellcasting;
    /// for everyone else the collection is empty regardless of what the
    /// spell tables hold.
    async fn assemble(&self, character: Character) -> Result<CharacterSheet> {
        let id = character.id;

        let skills = self
            .characters
            .skills(id)
            .await
            .context("Failed to fetch skills for character")?;

        let equipment = self
            .characters
            .equipment(id)
            .await
            .context("Failed to fetch equipment for character")?;

        let spells = if character.is_spellcaster {
            self.characters
                .spells(id)
                .await
                .context("Failed to fetch spells for character")?
        } else {
            Vec::new()
        };

        Ok(CharacterSheet {
            character,
            skills,
            equipment,
            spells,
        })
    }
}

#[async_trait]
impl CharacterSheetService for CharacterSheetServiceImpl {
    #[instrument(skip(self))]
    async fn party_sheets(&self, adventure_id: AdventureId) -> Result<Vec<CharacterSheet>> {
        let members = self
            .adventures
            .party_members(adventure_id)
            .await
            .context("Failed to fetch party members from store")?;

        debug!(
            adventure_id = %adventure_id,
            count = members.len(),
            "Assembling party sheets"
        );

        let mut sheets = Vec::with_capacity(members.len());
        for member in members {
            sheets.push(self.assemble(member).await?);
        }
        Ok(sheets)
    }

    #[instrument(skip(self))]
    async fn character_sheet(&self, id: CharacterId) -> Result<Option<CharacterSheet>> {
        let character = match self
            .characters
            .get_active(id)
            .await
            .context("Failed to fetch character from store")?
        {
            Some(c) => c,
            None => return Ok(None),
        };

        debug!(character_id = %id, "Assembling character sheet");
        Ok(Some(self.assemble(character).await?))
    }

    #[instrument(skip(self))]
    async fn active_sheet_for_user(&self, user_id: UserId) -> Result<Option<CharacterSheet>> {
        let character = match self
            .characters
            .latest_active_for_user(user_id)
            .await
            .context("Failed to fetch character for user from store")?
        {
            Some(c) => c,
            None => {
                debug!(user_id = %user_id, "No active character for user");
                return Ok(None);
            }
        };

        Ok(Some(self.assemble(character).await?))
    }
}
