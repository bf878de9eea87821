//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::outbound::{
    AdventureRepositoryPort, CharacterRepositoryPort, StoreHealthPort,
};
use crate::application::services::{
    AdventureService, AdventureServiceImpl, CharacterSheetService, CharacterSheetServiceImpl,
};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::{
    connect, MySqlAdventureRepository, MySqlCharacterRepository, MySqlStoreHealth,
};

/// Shared application state
pub struct AppState {
    pub adventure_service: Arc<dyn AdventureService>,
    pub sheet_service: Arc<dyn CharacterSheetService>,
    pub store_health: Arc<dyn StoreHealthPort>,
}

impl AppState {
    /// Connect to the configured MySQL store and wire the services
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let pool = connect(config).await?;

        let adventures: Arc<dyn AdventureRepositoryPort> =
            Arc::new(MySqlAdventureRepository::new(pool.clone()));
        let characters: Arc<dyn CharacterRepositoryPort> =
            Arc::new(MySqlCharacterRepository::new(pool.clone()));
        let store_health: Arc<dyn StoreHealthPort> = Arc::new(MySqlStoreHealth::new(pool));

        Ok(Self::from_ports(adventures, characters, store_health))
    }

    /// Wire the services over arbitrary port implementations
    ///
    /// Test suites pass the in-memory fixture store here.
    pub fn from_ports(
        adventures: Arc<dyn AdventureRepositoryPort>,
        characters: Arc<dyn CharacterRepositoryPort>,
        store_health: Arc<dyn StoreHealthPort>,
    ) -> Self {
        let adventure_service = Arc::new(AdventureServiceImpl::new(adventures.clone()));
        let sheet_service = Arc::new(CharacterSheetServiceImpl::new(adventures, characters));

        Self {
            adventure_service,
            sheet_service,
            store_health,
        }
    }
}
