//! Adventure Service - Application service for the adventure board

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::application::ports::outbound::AdventureRepositoryPort;
use crate::domain::entities::Adventure;

/// Adventure service trait defining the board use cases
#[async_trait]
pub trait AdventureService: Send + Sync {
    /// List active adventures with their participant counts
    async fn list_active_adventures(&self) -> Result<Vec<Adventure>>;
}

/// Default implementation backed by an adventure repository port
pub struct AdventureServiceImpl {
    adventures: Arc<dyn AdventureRepositoryPort>,
}

impl AdventureServiceImpl {
    pub fn new(adventures: Arc<dyn AdventureRepositoryPort>) -> Self {
        Self { adventures }
    }
}

#[async_trait]
impl AdventureService for AdventureServiceImpl {
    #[instrument(skip(self))]
    async fn list_active_adventures(&self) -> Result<Vec<Adventure>> {
        let adventures = self
            .adventures
            .list_active()
            .await
            .context("Failed to list active adventures from store")?;
        debug!(count = adventures.len(), "Listed active adventures");
        Ok(adventures)
    }
}
