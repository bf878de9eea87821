//! Wire DTOs - JSON shapes shared by the HTTP surface and the client
//!
//! Every response carries the upstream `{"success": bool, ...}` envelope.
//! The DTOs derive both `Serialize` and `Deserialize` so the server and the
//! polling client agree on one wire model.

mod adventure;
mod character;

pub use adventure::{AdventureDto, AdventureListResponse, PartyResponse};
pub use character::{
    CharacterResponse, CharacterSheetDto, EquipmentDto, HealthResponse, SpellDto,
};
