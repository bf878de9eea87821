//! Character API routes

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::application::dto::{CharacterResponse, CharacterSheetDto};
use crate::domain::value_objects::{CharacterId, UserId};
use crate::infrastructure::http::error::{ApiError, ApiResult};
use crate::infrastructure::state::AppState;

/// Detailed sheet for one character
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    Path(character_id): Path<i64>,
) -> ApiResult<Json<CharacterResponse>> {
    let sheet = state
        .sheet_service
        .character_sheet(CharacterId::new(character_id))
        .await?
        .ok_or_else(|| ApiError::NotFound("Character not found".to_string()))?;

    Ok(Json(CharacterResponse {
        success: true,
        character: Some(CharacterSheetDto::from(sheet)),
        message: None,
    }))
}

#[derive(Debug, Deserialize)]
pub struct MyCharacterQuery {
    user_id: Option<i64>,
}

/// The user's most recent active character
///
/// A user with no active character is a valid empty state: 200 with
/// `character: null`, not a 404.
pub async fn my_character(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MyCharacterQuery>,
) -> ApiResult<Json<CharacterResponse>> {
    let user_id = query
        .user_id
        .ok_or_else(|| ApiError::Validation("User ID is required".to_string()))?;

    let sheet = state
        .sheet_service
        .active_sheet_for_user(UserId::new(user_id))
        .await?;

    let response = match sheet {
        Some(sheet) => CharacterResponse {
            success: true,
            character: Some(CharacterSheetDto::from(sheet)),
            message: None,
        },
        None => CharacterResponse {
            success: true,
            character: None,
            message: Some("No active character found for this user".to_string()),
        },
    };

    Ok(Json(response))
}
