//! In-memory fixture store
//!
//! Implements the same outbound ports as the MySQL adapters over plain maps,
//! mirroring the ordering and gating rules the SQL encodes (party members by
//! name, spells by level then name, newest active character per user). Used
//! by the test suites and handy for running the server without a database.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::application::ports::outbound::{
    AdventureRepositoryPort, CharacterRepositoryPort, StoreHealthPort,
};
use crate::domain::entities::{
    AbilityScores, Adventure, Character, EquipmentItem, PlayerRef, Spell,
};
use crate::domain::value_objects::{AdventureId, CharacterId, UserId};

#[derive(Debug, Clone)]
struct CharacterRecord {
    character: Character,
    skills: Vec<String>,
    equipment: Vec<EquipmentItem>,
    spells: Vec<Spell>,
    active: bool,
}

/// Fixture-backed store implementing all outbound ports
#[derive(Default)]
pub struct MemoryStore {
    adventures: Vec<Adventure>,
    characters: HashMap<CharacterId, CharacterRecord>,
    participants: Vec<(AdventureId, CharacterId)>,
    sequence: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// Add an active-board adventure; participant counts are derived from
    /// `join_party` calls.
    pub fn add_adventure(&mut self, id: i64, status: &str) -> AdventureId {
        self.sequence += 1;
        let adventure_id = AdventureId::new(id);
        self.adventures.push(Adventure {
            id: adventure_id,
            chat_id: (-id).into(),
            status: status.to_string(),
            created_at: Self::epoch() + Duration::minutes(self.sequence),
            participant_count: 0,
        });
        adventure_id
    }

    /// Start building a character fixture
    pub fn character(&mut self, id: i64, user_id: i64, name: &str) -> CharacterBuilder<'_> {
        self.sequence += 1;
        let created_at = Self::epoch() + Duration::minutes(self.sequence);
        CharacterBuilder {
            store: self,
            record: CharacterRecord {
                character: Character {
                    id: CharacterId::new(id),
                    user_id: UserId::new(user_id),
                    owner: None,
                    name: name.to_string(),
                    level: 1,
                    experience: 0,
                    hit_points: 10,
                    max_hit_points: 10,
                    abilities: AbilityScores {
                        strength: 10,
                        dexterity: 10,
                        constitution: 10,
                        intelligence: 10,
                        wisdom: 10,
                        charisma: 10,
                    },
                    money: 0,
                    race_name: Some("Human".to_string()),
                    origin_name: Some("Commoner".to_string()),
                    class_name: None,
                    hit_die: None,
                    is_spellcaster: false,
                    proficiency_bonus: Some(2),
                    joined_at: None,
                    created_at: Some(created_at),
                },
                skills: Vec::new(),
                equipment: Vec::new(),
                spells: Vec::new(),
                active: true,
            },
        }
    }

    /// Put a character on an adventure's roster
    pub fn join_party(&mut self, adventure_id: AdventureId, character_id: CharacterId) {
        self.participants.push((adventure_id, character_id));
        if let Some(adventure) = self.adventures.iter_mut().find(|a| a.id == adventure_id) {
            adventure.participant_count += 1;
        }
    }
}

/// Builder for character fixtures
pub struct CharacterBuilder<'a> {
    store: &'a mut MemoryStore,
    record: CharacterRecord,
}

impl CharacterBuilder<'_> {
    pub fn level(mut self, level: i32) -> Self {
        self.record.character.level = level;
        self
    }

    pub fn class(mut self, name: &str, hit_die: i32, is_spellcaster: bool) -> Self {
        self.record.character.class_name = Some(name.to_string());
        self.record.character.hit_die = Some(hit_die);
        self.record.character.is_spellcaster = is_spellcaster;
        self
    }

    pub fn owner(mut self, first_name: &str, username: &str) -> Self {
        self.record.character.owner = Some(PlayerRef {
            first_name: Some(first_name.to_string()),
            username: Some(username.to_string()),
        });
        self
    }

    pub fn skill(mut self, name: &str) -> Self {
        self.record.skills.push(name.to_string());
        self
    }

    pub fn equipment(mut self, item: EquipmentItem) -> Self {
        self.record.equipment.push(item);
        self
    }

    pub fn spell(mut self, spell: Spell) -> Self {
        self.record.spells.push(spell);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.record.active = false;
        self
    }

    pub fn finish(self) -> CharacterId {
        let id = self.record.character.id;
        self.store.characters.insert(id, self.record);
        id
    }
}

#[async_trait]
impl AdventureRepositoryPort for MemoryStore {
    async fn list_active(&self) -> Result<Vec<Adventure>> {
        let mut active: Vec<Adventure> = self
            .adventures
            .iter()
            .filter(|a| a.status == "active")
            .cloned()
            .collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(active)
    }

    async fn party_members(&self, adventure_id: AdventureId) -> Result<Vec<Character>> {
        let mut members: Vec<Character> = self
            .participants
            .iter()
            .filter(|(aid, _)| *aid == adventure_id)
            .filter_map(|(_, cid)| self.characters.get(cid))
            .map(|record| record.character.clone())
            .collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(members)
    }
}

#[async_trait]
impl CharacterRepositoryPort for MemoryStore {
    async fn get_active(&self, id: CharacterId) -> Result<Option<Character>> {
        Ok(self
            .characters
            .get(&id)
            .filter(|record| record.active)
            .map(|record| record.character.clone()))
    }

    async fn latest_active_for_user(&self, user_id: UserId) -> Result<Option<Character>> {
        Ok(self
            .characters
            .values()
            .filter(|record| record.active && record.character.user_id == user_id)
            .max_by_key(|record| record.character.created_at)
            .map(|record| record.character.clone()))
    }

    async fn skills(&self, id: CharacterId) -> Result<Vec<String>> {
        Ok(self
            .characters
            .get(&id)
            .map(|record| record.skills.clone())
            .unwrap_or_default())
    }

    async fn equipment(&self, id: CharacterId) -> Result<Vec<EquipmentItem>> {
        Ok(self
            .characters
            .get(&id)
            .map(|record| record.equipment.clone())
            .unwrap_or_default())
    }

    async fn spells(&self, id: CharacterId) -> Result<Vec<Spell>> {
        let mut spells = self
            .characters
            .get(&id)
            .map(|record| record.spells.clone())
            .unwrap_or_default();
        spells.sort_by(|a, b| a.level.cmp(&b.level).then_with(|| a.name.cmp(&b.name)));
        Ok(spells)
    }
}

#[async_trait]
impl StoreHealthPort for MemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
