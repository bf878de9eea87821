//! HTTP REST API routes

mod adventure_routes;
mod character_routes;
pub mod error;
mod health_routes;

use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Json, Router};

use crate::infrastructure::http::error::ErrorResponse;
use crate::infrastructure::state::AppState;

pub use error::{ApiError, ApiResult};

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/adventures", get(adventure_routes::list_adventures))
        .route(
            "/api/adventures/{adventure_id}/party",
            get(adventure_routes::get_party),
        )
        .route(
            "/api/characters/{character_id}",
            get(character_routes::get_character),
        )
        .route("/api/my-character", get(character_routes::my_character))
        .route("/api/health", get(health_routes::health))
        .fallback(route_not_found)
}

/// Unmatched routes answer with the same envelope as other errors
async fn route_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            error: "Route not found".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{EquipmentItem, EquipmentKind, Spell};
    use crate::infrastructure::persistence::MemoryStore;
    use axum::{
        body::{to_bytes, Body},
        http::Request,
    };
    use tower::util::ServiceExt;

    fn fixture_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        let adventure = store.add_adventure(1, "active");
        store.add_adventure(2, "completed");

        let caster = store
            .character(10, 100, "Morgana")
            .level(3)
            .class("Wizard", 6, true)
            .owner("Maria", "maria_plays")
            .skill("Arcana")
            .spell(Spell {
                name: "Fire Bolt".to_string(),
                level: 0,
                damage: Some("1d10".to_string()),
                damage_type: Some("fire".to_string()),
                description: None,
            })
            .finish();
        let fighter = store
            .character(11, 101, "Brom")
            .level(4)
            .class("Fighter", 10, false)
            .equipment(EquipmentItem {
                item_id: 5.into(),
                name: "Chain Mail".to_string(),
                is_equipped: true,
                kind: EquipmentKind::Armor { armor_class: 16 },
            })
            .equipment(EquipmentItem {
                item_id: 6.into(),
                name: "Longsword".to_string(),
                is_equipped: true,
                kind: EquipmentKind::Weapon {
                    damage: "1d8".to_string(),
                    damage_type: Some("slashing".to_string()),
                },
            })
            .finish();

        store.join_party(adventure, caster);
        store.join_party(adventure, fighter);
        store
    }

    fn test_app() -> Router {
        let store = Arc::new(fixture_store());
        let state = Arc::new(AppState::from_ports(
            store.clone(),
            store.clone(),
            store,
        ));
        create_routes().with_state(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn test_health_ok() {
        let (status, body) = get_json(test_app(), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["status"], "Database connected");
    }

    #[tokio::test]
    async fn test_list_adventures_filters_and_counts() {
        let (status, body) = get_json(test_app(), "/api/adventures").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        // The completed adventure never shows up.
        let adventures = body["adventures"].as_array().unwrap();
        assert_eq!(adventures.len(), 1);
        assert_eq!(adventures[0]["adventure_id"], 1);
        assert_eq!(adventures[0]["participant_count"], 2);
    }

    #[tokio::test]
    async fn test_list_adventures_is_idempotent() {
        let app = test_app();
        let (_, first) = get_json(app.clone(), "/api/adventures").await;
        let (_, second) = get_json(app, "/api/adventures").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_party_sheets_nested_collections() {
        let (status, body) = get_json(test_app(), "/api/adventures/1/party").await;
        assert_eq!(status, StatusCode::OK);

        let party = body["party"].as_array().unwrap();
        assert_eq!(party.len(), 2);
        // Ordered by name
        assert_eq!(party[0]["name"], "Brom");
        assert_eq!(party[1]["name"], "Morgana");

        // The fighter carries no spells, the wizard does
        assert!(party[0]["spells"].as_array().unwrap().is_empty());
        assert_eq!(party[1]["spells"].as_array().unwrap().len(), 1);

        // Equipment union: exactly one field set per row
        let armor = &party[0]["equipment"][0];
        assert_eq!(armor["item_type"], "armor");
        assert_eq!(armor["armor_class"], 16);
        assert!(armor.get("damage").is_none());

        let weapon = &party[0]["equipment"][1];
        assert_eq!(weapon["item_type"], "weapon");
        assert_eq!(weapon["damage"], "1d8");
        assert!(weapon.get("armor_class").is_none());
    }

    #[tokio::test]
    async fn test_character_detail_found() {
        let (status, body) = get_json(test_app(), "/api/characters/10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["character"]["name"], "Morgana");
        assert_eq!(body["character"]["is_spellcaster"], true);
    }

    #[tokio::test]
    async fn test_character_detail_missing_is_404() {
        let (status, body) = get_json(test_app(), "/api/characters/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Character not found");
    }

    #[tokio::test]
    async fn test_my_character_requires_user_id() {
        let (status, body) = get_json(test_app(), "/api/my-character").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "User ID is required");
    }

    #[tokio::test]
    async fn test_my_character_empty_state_is_not_404() {
        let (status, body) = get_json(test_app(), "/api/my-character?user_id=555").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["character"].is_null());
    }

    #[tokio::test]
    async fn test_my_character_found() {
        let (status, body) = get_json(test_app(), "/api/my-character?user_id=100").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["character"]["character_id"], 10);
        assert_eq!(body["character"]["first_name"], "Maria");
    }

    #[tokio::test]
    async fn test_unmatched_route_is_404_envelope() {
        let (status, body) = get_json(test_app(), "/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Route not found");
    }
}
