//! Adventure repository implementation for MySQL

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use super::character_repository::{CharacterRow, PARTY_MEMBER_QUERY};
use crate::application::ports::outbound::AdventureRepositoryPort;
use crate::domain::entities::{Adventure, Character};
use crate::domain::value_objects::AdventureId;

/// Repository for adventure listings and party rosters
pub struct MySqlAdventureRepository {
    pool: MySqlPool,
}

impl MySqlAdventureRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AdventureRow {
    adventure_id: i64,
    chat_id: i64,
    status: String,
    created_at: DateTime<Utc>,
    participant_count: i64,
}

impl From<AdventureRow> for Adventure {
    fn from(row: AdventureRow) -> Self {
        Adventure {
            id: row.adventure_id.into(),
            chat_id: row.chat_id.into(),
            status: row.status,
            created_at: row.created_at,
            participant_count: row.participant_count,
        }
    }
}

#[async_trait]
impl AdventureRepositoryPort for MySqlAdventureRepository {
    async fn list_active(&self) -> Result<Vec<Adventure>> {
        let rows: Vec<AdventureRow> = sqlx::query_as(
            r#"
            SELECT
                a.id AS adventure_id,
                a.chat_id,
                a.status,
                a.created_at,
                COUNT(ap.character_id) AS participant_count
            FROM adventures a
            LEFT JOIN adventure_participants ap ON a.id = ap.adventure_id
            WHERE a.status = 'active'
            GROUP BY a.id, a.chat_id, a.status, a.created_at
            ORDER BY a.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to query active adventures")?;

        tracing::debug!(count = rows.len(), "Fetched active adventures");
        Ok(rows.into_iter().map(Adventure::from).collect())
    }

    async fn party_members(&self, adventure_id: AdventureId) -> Result<Vec<Character>> {
        let rows: Vec<CharacterRow> = sqlx::query_as(PARTY_MEMBER_QUERY)
            .bind(adventure_id.as_i64())
            .fetch_all(&self.pool)
            .await
            .context("Failed to query party members")?;

        tracing::debug!(
            adventure_id = %adventure_id,
            count = rows.len(),
            "Fetched party members"
        );
        Ok(rows.into_iter().map(Character::from).collect())
    }
}
