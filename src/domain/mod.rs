//! Domain layer - Core data model with no external dependencies
//!
//! This layer contains:
//! - Entities: Adventure, Character, EquipmentItem, Spell
//! - Value Objects: Strongly-typed identifiers

pub mod entities;
pub mod value_objects;
