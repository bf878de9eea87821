//! Domain entities - Read-only projections of the bot's store

mod adventure;
mod character;
mod equipment;
mod spell;

pub use adventure::Adventure;
pub use character::{AbilityScores, Character, CharacterSheet, PlayerRef};
pub use equipment::{EquipmentItem, EquipmentKind};
pub use spell::Spell;
