//! Equipment entity - Polymorphic armor/weapon items

use crate::domain::value_objects::ItemId;

/// What an equipment row resolved to
///
/// The store keeps armor and weapons in separate tables behind an
/// `item_type` tag; the tag is dispatched once, in the equipment query, and
/// lands here as a sum type. Each variant carries only its own fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipmentKind {
    Armor { armor_class: i32 },
    Weapon { damage: String, damage_type: Option<String> },
}

impl EquipmentKind {
    /// The `item_type` tag this variant corresponds to on the wire
    pub fn tag(&self) -> &'static str {
        match self {
            EquipmentKind::Armor { .. } => "armor",
            EquipmentKind::Weapon { .. } => "weapon",
        }
    }
}

/// A single carried item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentItem {
    pub item_id: ItemId,
    pub name: String,
    pub is_equipped: bool,
    pub kind: EquipmentKind,
}
