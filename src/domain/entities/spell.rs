//! Spell entity

/// A spell known by a spellcasting character
///
/// Level 0 is a cantrip. Damage and description are optional; utility spells
/// carry neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spell {
    pub name: String,
    pub level: i32,
    pub damage: Option<String>,
    pub damage_type: Option<String>,
    pub description: Option<String>,
}

impl Spell {
    pub fn is_cantrip(&self) -> bool {
        self.level == 0
    }
}
