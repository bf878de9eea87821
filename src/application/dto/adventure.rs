//! Adventure wire DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::dto::CharacterSheetDto;
use crate::domain::entities::Adventure;

/// One adventure in the board listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdventureDto {
    pub adventure_id: i64,
    pub chat_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub participant_count: i64,
}

impl From<Adventure> for AdventureDto {
    fn from(adventure: Adventure) -> Self {
        Self {
            adventure_id: adventure.id.as_i64(),
            chat_id: adventure.chat_id.as_i64(),
            status: adventure.status,
            created_at: adventure.created_at,
            participant_count: adventure.participant_count,
        }
    }
}

/// Envelope for `GET /api/adventures`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdventureListResponse {
    pub success: bool,
    pub adventures: Vec<AdventureDto>,
}

/// Envelope for `GET /api/adventures/{id}/party`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyResponse {
    pub success: bool,
    pub party: Vec<CharacterSheetDto>,
}
