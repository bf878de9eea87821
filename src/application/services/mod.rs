//! Application services - Use case implementations

mod adventure_service;
mod character_sheet_service;

pub use adventure_service::{AdventureService, AdventureServiceImpl};
pub use character_sheet_service::{CharacterSheetService, CharacterSheetServiceImpl};
