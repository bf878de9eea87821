//! Character entity - A player's character with resolved reference data

use chrono::{DateTime, Utc};

use crate::domain::entities::{EquipmentItem, Spell};
use crate::domain::value_objects::{CharacterId, UserId};

/// The six ability scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityScores {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl AbilityScores {
    /// Standard ability modifier: floor((score - 10) / 2)
    pub fn modifier(score: i32) -> i32 {
        (score - 10).div_euclid(2)
    }
}

/// Display info for the owning player, resolved via the users join
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRef {
    pub first_name: Option<String>,
    pub username: Option<String>,
}

/// A character base row with its reference tables resolved
///
/// Race, origin, class, and proficiency come from LEFT JOINs against the
/// bot's reference tables, so they stay optional. `joined_at` is only
/// present when the character was fetched as a party member.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: CharacterId,
    pub user_id: UserId,
    pub owner: Option<PlayerRef>,
    pub name: String,
    pub level: i32,
    pub experience: i64,
    pub hit_points: i32,
    pub max_hit_points: i32,
    pub abilities: AbilityScores,
    pub money: i64,
    pub race_name: Option<String>,
    pub origin_name: Option<String>,
    pub class_name: Option<String>,
    /// Die size for the class hit die (8 for a d8)
    pub hit_die: Option<i32>,
    /// Gates whether spell data is ever attached to this character
    pub is_spellcaster: bool,
    /// Derived from the level reference table
    pub proficiency_bonus: Option<i32>,
    pub joined_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A character with its dependent collections attached
///
/// Produced by the aggregation service: skills are unordered, spells arrive
/// ordered by (level, name), and spells are empty unless the class is
/// flagged spellcasting.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterSheet {
    pub character: Character,
    pub skills: Vec<String>,
    pub equipment: Vec<EquipmentItem>,
    pub spells: Vec<Spell>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_modifier() {
        assert_eq!(AbilityScores::modifier(10), 0);
        assert_eq!(AbilityScores::modifier(11), 0);
        assert_eq!(AbilityScores::modifier(12), 1);
        assert_eq!(AbilityScores::modifier(18), 4);
        assert_eq!(AbilityScores::modifier(20), 5);
    }

    #[test]
    fn test_ability_modifier_rounds_down_below_ten() {
        // floor semantics, not truncation toward zero
        assert_eq!(AbilityScores::modifier(9), -1);
        assert_eq!(AbilityScores::modifier(8), -1);
        assert_eq!(AbilityScores::modifier(7), -2);
        assert_eq!(AbilityScores::modifier(3), -4);
    }
}
