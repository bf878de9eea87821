//! Adventure API routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::{AdventureDto, AdventureListResponse, CharacterSheetDto, PartyResponse};
use crate::domain::value_objects::AdventureId;
use crate::infrastructure::http::error::ApiResult;
use crate::infrastructure::state::AppState;

/// List active adventures with participant counts
pub async fn list_adventures(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<AdventureListResponse>> {
    let adventures = state.adventure_service.list_active_adventures().await?;

    Ok(Json(AdventureListResponse {
        success: true,
        adventures: adventures.into_iter().map(AdventureDto::from).collect(),
    }))
}

/// Full sheets for an adventure's party members
pub async fn get_party(
    State(state): State<Arc<AppState>>,
    Path(adventure_id): Path<i64>,
) -> ApiResult<Json<PartyResponse>> {
    let sheets = state
        .sheet_service
        .party_sheets(AdventureId::new(adventure_id))
        .await?;

    Ok(Json(PartyResponse {
        success: true,
        party: sheets.into_iter().map(CharacterSheetDto::from).collect(),
    }))
}
