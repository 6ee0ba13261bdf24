//! Type-safe HTTP client for the hangman REST API.

use anyhow::Result;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::game::{GameDetails, GameId, HistorySummary, PlayView};

/// JSON body returned by the API on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// JSON body returned when a game is started.
#[derive(Debug, Deserialize)]
struct StartGameResponse {
    game_id: GameId,
}

/// Type-safe HTTP game client.
#[derive(Debug, Clone)]
pub struct RestGameClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestGameClient {
    /// Creates a client for the API at the given base URL.
    #[instrument(skip_all, fields(base_url = %base_url))]
    pub fn new(base_url: String) -> Self {
        info!("Creating REST client");
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Starts a new game and returns its id.
    #[instrument(skip(self))]
    pub async fn start_game(&self) -> Result<GameId> {
        debug!("Starting new game via REST");
        let url = format!("{}/api/games", self.base_url);
        let response = self.client.post(&url).send().await?;
        let started: StartGameResponse = self.read_json(response).await?;

        info!(game_id = started.game_id, "Game started");
        Ok(started.game_id)
    }

    /// Gets the play view of a game.
    #[instrument(skip(self))]
    pub async fn get_state(&self, id: GameId) -> Result<PlayView> {
        debug!(game_id = %id, "Getting game state via REST");
        let url = format!("{}/api/games/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;
        self.read_json(response).await
    }

    /// Submits a guess and returns the updated play view.
    #[instrument(skip(self))]
    pub async fn guess(&self, id: GameId, letter: char) -> Result<PlayView> {
        info!(game_id = %id, letter = %letter, "Sending guess");
        let url = format!("{}/api/games/{}/guess", self.base_url, id);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "letter": letter.to_string() }))
            .send()
            .await?;
        self.read_json(response).await
    }

    /// Lists the history of every game.
    #[instrument(skip(self))]
    pub async fn get_history(&self) -> Result<Vec<HistorySummary>> {
        debug!("Getting game history via REST");
        let url = format!("{}/api/games", self.base_url);
        let response = self.client.get(&url).send().await?;
        self.read_json(response).await
    }

    /// Gets the full record of a game.
    #[instrument(skip(self))]
    pub async fn get_details(&self, id: GameId) -> Result<GameDetails> {
        debug!(game_id = %id, "Getting game details via REST");
        let url = format!("{}/api/games/{}/details", self.base_url, id);
        let response = self.client.get(&url).send().await?;
        self.read_json(response).await
    }

    /// Decodes a success body, or raises the `{"error"}` message as an error.
    async fn read_json<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("HTTP {}", status),
        };
        debug!(status = %status, message = %message, "Request failed");
        anyhow::bail!("{}", message)
    }
}
