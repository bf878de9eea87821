//! Character repository implementation for MySQL
//!
//! Base rows come through one join across the reference tables (race,
//! origin, class, level). The dependent collections are separate queries
//! keyed by character id, matching how the bot wrote them.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use crate::application::ports::outbound::CharacterRepositoryPort;
use crate::domain::entities::{
    AbilityScores, Character, EquipmentItem, EquipmentKind, PlayerRef, Spell,
};
use crate::domain::value_objects::{CharacterId, UserId};

/// Party roster query: base rows plus owner display info and join time,
/// ordered by character name.
pub(super) const PARTY_MEMBER_QUERY: &str = r#"
    SELECT
        c.id AS character_id,
        c.user_id,
        c.name,
        c.level,
        c.experience,
        u.first_name,
        u.username,
        c.hit_points,
        c.max_hit_points,
        c.strength,
        c.dexterity,
        c.constitution,
        c.intelligence,
        c.wisdom,
        c.charisma,
        c.money,
        r.name AS race_name,
        o.name AS origin_name,
        cl.name AS class_name,
        cl.hit_die,
        cl.is_spellcaster,
        l.proficiency_bonus,
        ap.joined_at
    FROM adventure_participants ap
    INNER JOIN characters c ON ap.character_id = c.id
    LEFT JOIN users u ON c.user_id = u.id
    LEFT JOIN races r ON c.race_id = r.id
    LEFT JOIN origins o ON c.origin_id = o.id
    LEFT JOIN classes cl ON c.class_id = cl.id
    LEFT JOIN levels l ON c.level = l.level
    WHERE ap.adventure_id = ?
    ORDER BY c.name
"#;

const CHARACTER_BASE_COLUMNS: &str = r#"
    SELECT
        c.id AS character_id,
        c.user_id,
        c.name,
        c.level,
        c.experience,
        c.hit_points,
        c.max_hit_points,
        c.strength,
        c.dexterity,
        c.constitution,
        c.intelligence,
        c.wisdom,
        c.charisma,
        c.money,
        r.name AS race_name,
        o.name AS origin_name,
        cl.name AS class_name,
        cl.hit_die,
        cl.is_spellcaster,
        l.proficiency_bonus,
        c.created_at
    FROM characters c
    LEFT JOIN races r ON c.race_id = r.id
    LEFT JOIN origins o ON c.origin_id = o.id
    LEFT JOIN classes cl ON c.class_id = cl.id
    LEFT JOIN levels l ON c.level = l.level
"#;

/// One base character row as the reference-table join produces it
///
/// Columns not selected by a given query fall back to their defaults, so the
/// same row type serves the party, detail, and my-character queries.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct CharacterRow {
    character_id: i64,
    user_id: i64,
    name: String,
    level: i32,
    experience: i64,
    hit_points: i32,
    max_hit_points: i32,
    strength: i32,
    dexterity: i32,
    constitution: i32,
    intelligence: i32,
    wisdom: i32,
    charisma: i32,
    money: i64,
    race_name: Option<String>,
    origin_name: Option<String>,
    class_name: Option<String>,
    hit_die: Option<i32>,
    is_spellcaster: Option<bool>,
    proficiency_bonus: Option<i32>,
    #[sqlx(default)]
    first_name: Option<String>,
    #[sqlx(default)]
    username: Option<String>,
    #[sqlx(default)]
    joined_at: Option<DateTime<Utc>>,
    #[sqlx(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<CharacterRow> for Character {
    fn from(row: CharacterRow) -> Self {
        let owner = if row.first_name.is_some() || row.username.is_some() {
            Some(PlayerRef {
                first_name: row.first_name,
                username: row.username,
            })
        } else {
            None
        };
        Character {
            id: row.character_id.into(),
            user_id: row.user_id.into(),
            owner,
            name: row.name,
            level: row.level,
            experience: row.experience,
            hit_points: row.hit_points,
            max_hit_points: row.max_hit_points,
            abilities: AbilityScores {
                strength: row.strength,
                dexterity: row.dexterity,
                constitution: row.constitution,
                intelligence: row.intelligence,
                wisdom: row.wisdom,
                charisma: row.charisma,
            },
            money: row.money,
            race_name: row.race_name,
            origin_name: row.origin_name,
            class_name: row.class_name,
            hit_die: row.hit_die,
            is_spellcaster: row.is_spellcaster.unwrap_or(false),
            proficiency_bonus: row.proficiency_bonus,
            joined_at: row.joined_at,
            created_at: row.created_at,
        }
    }
}

/// One equipment row with its type tag dispatched in SQL
///
/// The CASE expressions resolve the display name and the variant fields
/// against whichever source table the tag points at.
#[derive(Debug, sqlx::FromRow)]
struct EquipmentRow {
    item_type: String,
    item_id: i64,
    is_equipped: bool,
    item_name: Option<String>,
    damage: Option<String>,
    damage_type: Option<String>,
    armor_class: Option<i32>,
}

impl TryFrom<EquipmentRow> for EquipmentItem {
    type Error = anyhow::Error;

    fn try_from(row: EquipmentRow) -> Result<Self> {
        let name = match row.item_name {
            Some(name) => name,
            // A tag that resolves against neither source table breaks the
            // store invariant; the whole request fails rather than
            // returning a partial result.
            None => bail!(
                "Equipment row {} with type '{}' did not resolve to a source table",
                row.item_id,
                row.item_type
            ),
        };

        let kind = match row.item_type.as_str() {
            "armor" => match row.armor_class {
                Some(armor_class) => EquipmentKind::Armor { armor_class },
                None => bail!("Armor row {} is missing its armor class", row.item_id),
            },
            "weapon" => match row.damage {
                Some(damage) => EquipmentKind::Weapon {
                    damage,
                    damage_type: row.damage_type,
                },
                None => bail!("Weapon row {} is missing its damage expression", row.item_id),
            },
            other => bail!("Unknown equipment type tag '{}'", other),
        };

        Ok(EquipmentItem {
            item_id: row.item_id.into(),
            name,
            is_equipped: row.is_equipped,
            kind,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SpellRow {
    name: String,
    level: i32,
    damage: Option<String>,
    damage_type: Option<String>,
    description: Option<String>,
}

impl From<SpellRow> for Spell {
    fn from(row: SpellRow) -> Self {
        Spell {
            name: row.name,
            level: row.level,
            damage: row.damage,
            damage_type: row.damage_type,
            description: row.description,
        }
    }
}

/// Repository for character detail lookups
pub struct MySqlCharacterRepository {
    pool: MySqlPool,
}

impl MySqlCharacterRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacterRepositoryPort for MySqlCharacterRepository {
    async fn get_active(&self, id: CharacterId) -> Result<Option<Character>> {
        let query = format!(
            "{CHARACTER_BASE_COLUMNS} WHERE c.id = ? AND c.is_active = TRUE"
        );
        let row: Option<CharacterRow> = sqlx::query_as(&query)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .context("Failed to query character")?;

        Ok(row.map(Character::from))
    }

    async fn latest_active_for_user(&self, user_id: UserId) -> Result<Option<Character>> {
        let query = format!(
            "{CHARACTER_BASE_COLUMNS} \
             WHERE c.user_id = ? AND c.is_active = TRUE \
             ORDER BY c.created_at DESC \
             LIMIT 1"
        );
        let row: Option<CharacterRow> = sqlx::query_as(&query)
            .bind(user_id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .context("Failed to query character for user")?;

        Ok(row.map(Character::from))
    }

    async fn skills(&self, id: CharacterId) -> Result<Vec<String>> {
        let skills: Vec<String> = sqlx::query_scalar(
            "SELECT skill_name FROM character_skills WHERE character_id = ?",
        )
        .bind(id.as_i64())
        .fetch_all(&self.pool)
        .await
        .context("Failed to query character skills")?;

        Ok(skills)
    }

    async fn equipment(&self, id: CharacterId) -> Result<Vec<EquipmentItem>> {
        let rows: Vec<EquipmentRow> = sqlx::query_as(
            r#"
            SELECT
                ce.item_type,
                ce.item_id,
                ce.is_equipped,
                CASE
                    WHEN ce.item_type = 'armor' THEN a.name
                    WHEN ce.item_type = 'weapon' THEN w.name
                END AS item_name,
                CASE
                    WHEN ce.item_type = 'weapon' THEN w.damage
                    ELSE NULL
                END AS damage,
                CASE
                    WHEN ce.item_type = 'weapon' THEN w.damage_type
                    ELSE NULL
                END AS damage_type,
                CASE
                    WHEN ce.item_type = 'armor' THEN a.armor_class
                    ELSE NULL
                END AS armor_class
            FROM character_equipment ce
            LEFT JOIN armor a ON ce.item_type = 'armor' AND ce.item_id = a.id
            LEFT JOIN weapons w ON ce.item_type = 'weapon' AND ce.item_id = w.id
            WHERE ce.character_id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_all(&self.pool)
        .await
        .context("Failed to query character equipment")?;

        rows.into_iter().map(EquipmentItem::try_from).collect()
    }

    async fn spells(&self, id: CharacterId) -> Result<Vec<Spell>> {
        let rows: Vec<SpellRow> = sqlx::query_as(
            r#"
            SELECT s.name, s.level, s.damage, s.damage_type, s.description
            FROM character_spells cs
            JOIN spells s ON cs.spell_id = s.id
            WHERE cs.character_id = ?
            ORDER BY s.level, s.name
            "#,
        )
        .bind(id.as_i64())
        .fetch_all(&self.pool)
        .await
        .context("Failed to query character spells")?;

        Ok(rows.into_iter().map(Spell::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_row(item_type: &str) -> EquipmentRow {
        EquipmentRow {
            item_type: item_type.to_string(),
            item_id: 1,
            is_equipped: true,
            item_name: Some("Shield".to_string()),
            damage: None,
            damage_type: None,
            armor_class: None,
        }
    }

    #[test]
    fn test_armor_row_resolves_to_armor_kind() {
        let mut row = base_row("armor");
        row.armor_class = Some(12);
        let item = EquipmentItem::try_from(row).unwrap();
        assert_eq!(item.kind, EquipmentKind::Armor { armor_class: 12 });
    }

    #[test]
    fn test_weapon_row_resolves_to_weapon_kind() {
        let mut row = base_row("weapon");
        row.item_name = Some("Dagger".to_string());
        row.damage = Some("1d4".to_string());
        row.damage_type = Some("piercing".to_string());
        let item = EquipmentItem::try_from(row).unwrap();
        assert_eq!(
            item.kind,
            EquipmentKind::Weapon {
                damage: "1d4".to_string(),
                damage_type: Some("piercing".to_string()),
            }
        );
    }

    #[test]
    fn test_unresolved_row_is_an_error() {
        let mut row = base_row("armor");
        row.item_name = None;
        assert!(EquipmentItem::try_from(row).is_err());
    }

    #[test]
    fn test_unknown_tag_is_an_error() {
        let row = base_row("trinket");
        assert!(EquipmentItem::try_from(row).is_err());
    }
}
