//! Typed client for the Partyboard REST API

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::application::dto::{
    AdventureDto, AdventureListResponse, CharacterResponse, CharacterSheetDto, PartyResponse,
};
use crate::domain::value_objects::{AdventureId, CharacterId, UserId};

/// Client errors
#[derive(Error, Debug)]
pub enum BoardError {
    /// Transport or decode failure
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered 404 for the requested entity
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server reported a failure in the response envelope
    #[error("API error: {0}")]
    Api(String),
}

/// Client for the Partyboard API
pub struct BoardClient {
    client: Client,
    base_url: String,
}

impl BoardClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Active adventures with participant counts
    pub async fn adventures(&self) -> Result<Vec<AdventureDto>, BoardError> {
        let response = self
            .client
            .get(format!("{}/api/adventures", self.base_url))
            .send()
            .await?;
        let body: AdventureListResponse = Self::check(response).await?.json().await?;
        if !body.success {
            return Err(BoardError::Api("Failed to fetch adventures".to_string()));
        }
        Ok(body.adventures)
    }

    /// Full sheets for an adventure's party
    pub async fn party(
        &self,
        adventure_id: AdventureId,
    ) -> Result<Vec<CharacterSheetDto>, BoardError> {
        let response = self
            .client
            .get(format!(
                "{}/api/adventures/{}/party",
                self.base_url, adventure_id
            ))
            .send()
            .await?;
        let body: PartyResponse = Self::check(response).await?.json().await?;
        if !body.success {
            return Err(BoardError::Api("Failed to fetch party members".to_string()));
        }
        Ok(body.party)
    }

    /// Detailed sheet for one character
    pub async fn character(&self, id: CharacterId) -> Result<CharacterSheetDto, BoardError> {
        let response = self
            .client
            .get(format!("{}/api/characters/{}", self.base_url, id))
            .send()
            .await?;
        let body: CharacterResponse = Self::check(response).await?.json().await?;
        body.character
            .ok_or_else(|| BoardError::Api("Response carried no character".to_string()))
    }

    /// The user's most recent active character, if any
    ///
    /// `Ok(None)` mirrors the server's valid empty state.
    pub async fn my_character(
        &self,
        user_id: UserId,
    ) -> Result<Option<CharacterSheetDto>, BoardError> {
        let response = self
            .client
            .get(format!(
                "{}/api/my-character?user_id={}",
                self.base_url, user_id
            ))
            .send()
            .await?;
        let body: CharacterResponse = Self::check(response).await?.json().await?;
        if !body.success {
            return Err(BoardError::Api("Failed to fetch character".to_string()));
        }
        Ok(body.character)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, BoardError> {
        match response.status() {
            StatusCode::NOT_FOUND => {
                Err(BoardError::NotFound(response.url().path().to_string()))
            }
            status if !status.is_success() => {
                Err(BoardError::Api(format!("Server answered {status}")))
            }
            _ => Ok(response),
        }
    }
}
