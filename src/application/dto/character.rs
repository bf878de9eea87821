//! Character wire DTOs
//!
//! Field names mirror the bot's existing JSON payloads so the viewer and any
//! other consumers keep working unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CharacterSheet, EquipmentItem, EquipmentKind, Spell};

/// A full character sheet on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSheetDto {
    pub character_id: i64,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub name: String,
    pub level: i32,
    pub experience: i64,
    pub hit_points: i32,
    pub max_hit_points: i32,
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
    pub money: i64,
    pub race_name: Option<String>,
    pub origin_name: Option<String>,
    pub class_name: Option<String>,
    pub hit_die: Option<i32>,
    pub is_spellcaster: bool,
    pub proficiency_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub skills: Vec<String>,
    pub equipment: Vec<EquipmentDto>,
    pub spells: Vec<SpellDto>,
}

impl From<CharacterSheet> for CharacterSheetDto {
    fn from(sheet: CharacterSheet) -> Self {
        let c = sheet.character;
        let (first_name, username) = match c.owner {
            Some(owner) => (owner.first_name, owner.username),
            None => (None, None),
        };
        Self {
            character_id: c.id.as_i64(),
            user_id: c.user_id.as_i64(),
            first_name,
            username,
            name: c.name,
            level: c.level,
            experience: c.experience,
            hit_points: c.hit_points,
            max_hit_points: c.max_hit_points,
            strength: c.abilities.strength,
            dexterity: c.abilities.dexterity,
            constitution: c.abilities.constitution,
            intelligence: c.abilities.intelligence,
            wisdom: c.abilities.wisdom,
            charisma: c.abilities.charisma,
            money: c.money,
            race_name: c.race_name,
            origin_name: c.origin_name,
            class_name: c.class_name,
            hit_die: c.hit_die,
            is_spellcaster: c.is_spellcaster,
            proficiency_bonus: c.proficiency_bonus,
            joined_at: c.joined_at,
            created_at: c.created_at,
            skills: sheet.skills,
            equipment: sheet.equipment.into_iter().map(EquipmentDto::from).collect(),
            spells: sheet.spells.into_iter().map(SpellDto::from).collect(),
        }
    }
}

/// An equipment row on the wire
///
/// The armor/weapon union stays flattened for wire compatibility: only the
/// fields belonging to the row's `item_type` are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentDto {
    pub item_type: String,
    pub item_id: i64,
    pub is_equipped: bool,
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub armor_class: Option<i32>,
}

impl From<EquipmentItem> for EquipmentDto {
    fn from(item: EquipmentItem) -> Self {
        let item_type = item.kind.tag().to_string();
        let (damage, damage_type, armor_class) = match item.kind {
            EquipmentKind::Armor { armor_class } => (None, None, Some(armor_class)),
            EquipmentKind::Weapon {
                damage,
                damage_type,
            } => (Some(damage), damage_type, None),
        };
        Self {
            item_type,
            item_id: item.item_id.as_i64(),
            is_equipped: item.is_equipped,
            item_name: item.name,
            damage,
            damage_type,
            armor_class,
        }
    }
}

/// A spell on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellDto {
    pub name: String,
    pub level: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Spell> for SpellDto {
    fn from(spell: Spell) -> Self {
        Self {
            name: spell.name,
            level: spell.level,
            damage: spell.damage,
            damage_type: spell.damage_type,
            description: spell.description,
        }
    }
}

/// Envelope for the character detail and my-character endpoints
///
/// `character: null` with `success: true` is the my-character empty state;
/// it is not the same as a 404.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterResponse {
    pub success: bool,
    pub character: Option<CharacterSheetDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Envelope for `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ItemId;

    #[test]
    fn test_armor_serializes_only_armor_fields() {
        let dto = EquipmentDto::from(EquipmentItem {
            item_id: ItemId::new(3),
            name: "Leather Armor".to_string(),
            is_equipped: true,
            kind: EquipmentKind::Armor { armor_class: 11 },
        });
        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["item_type"], "armor");
        assert_eq!(value["armor_class"], 11);
        assert!(value.get("damage").is_none());
        assert!(value.get("damage_type").is_none());
    }

    #[test]
    fn test_weapon_serializes_only_weapon_fields() {
        let dto = EquipmentDto::from(EquipmentItem {
            item_id: ItemId::new(4),
            name: "Longsword".to_string(),
            is_equipped: false,
            kind: EquipmentKind::Weapon {
                damage: "1d8".to_string(),
                damage_type: Some("slashing".to_string()),
            },
        });
        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["item_type"], "weapon");
        assert_eq!(value["damage"], "1d8");
        assert_eq!(value["damage_type"], "slashing");
        assert!(value.get("armor_class").is_none());
    }

    #[test]
    fn test_character_null_envelope_round_trips() {
        let response = CharacterResponse {
            success: true,
            character: None,
            message: Some("No active character found for this user".to_string()),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"character\":null"));

        let back: CharacterResponse = serde_json::from_str(&json).unwrap();
        assert!(back.success);
        assert!(back.character.is_none());
    }
}
