//! Game orchestration business logic layer.

use chrono::Utc;
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument};

use crate::db::DbError;
use crate::game::{
    GameDetails, GameId, Guess, HistorySummary, PlayView, game_details, history_summary, is_over,
    play_view, update_outcome,
};
use crate::store::GameStore;

/// Errors raised while orchestrating a round.
#[derive(Debug, Clone, Display, Error, From)]
pub enum GameError {
    /// The word store is empty, so no game can start.
    #[display("No words available")]
    NoWordsAvailable,
    /// No game exists with the requested id.
    #[display("Game not found")]
    GameNotFound,
    /// The game already has a decided outcome.
    #[display("Game is over")]
    GameAlreadyOver,
    /// The letter was already guessed in this game.
    #[display("Letter already guessed")]
    LetterAlreadyGuessed,
    /// The guess is not a single alphabetic character.
    #[display("Invalid letter")]
    InvalidLetter,
    /// The backing store failed.
    #[display("{_0}")]
    #[from]
    Store(#[error(source)] DbError),
}

/// Validates raw guess input and folds it to lowercase.
///
/// Boundaries call this before handing a letter to [`GameService`], so
/// malformed input never reaches a game.
///
/// # Errors
///
/// Returns [`GameError::InvalidLetter`] unless the input is exactly one
/// alphabetic character.
pub fn parse_letter(raw: &str) -> Result<char, GameError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => Ok(letter.to_ascii_lowercase()),
        _ => Err(GameError::InvalidLetter),
    }
}

/// Service layer for playing and reviewing hangman rounds.
///
/// Wraps a [`GameStore`] with the game rules: starting rounds, applying
/// guesses, and building the read models served over the API.
#[derive(Debug, Clone)]
pub struct GameService<S> {
    store: S,
}

impl<S: GameStore> GameService<S> {
    /// Creates a new game service backed by the given store.
    #[instrument(skip(store))]
    pub fn new(store: S) -> Self {
        info!("Creating GameService");
        Self { store }
    }

    /// Starts a new round on a random word and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoWordsAvailable`] when the word store is
    /// empty, or [`GameError::Store`] when persistence fails.
    #[instrument(skip(self))]
    pub fn start_new_game(&self) -> Result<GameId, GameError> {
        debug!("Starting new game");
        let word = self
            .store
            .find_random_word()?
            .ok_or(GameError::NoWordsAvailable)?;
        let game = self.store.create_game(&word)?;
        info!(game_id = game.id(), "Game started");
        Ok(game.id())
    }

    /// Applies a guess to a running game and returns the updated view.
    ///
    /// Expects a letter that already passed [`parse_letter`]; it is folded
    /// to lowercase again before it is compared or stored.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] for an unknown id,
    /// [`GameError::GameAlreadyOver`] once the outcome is decided,
    /// [`GameError::LetterAlreadyGuessed`] for a repeat, or
    /// [`GameError::Store`] when persistence fails.
    #[instrument(skip(self))]
    pub fn submit_guess(&self, id: GameId, letter: char) -> Result<PlayView, GameError> {
        debug!(game_id = %id, letter = %letter, "Submitting guess");
        let letter = letter.to_ascii_lowercase();

        let mut game = self.store.find_game(id)?.ok_or(GameError::GameNotFound)?;
        if is_over(&game) {
            return Err(GameError::GameAlreadyOver);
        }
        if game.has_guessed(letter) {
            return Err(GameError::LetterAlreadyGuessed);
        }

        game.push_guess(Guess::new(letter, Utc::now().naive_utc()));
        update_outcome(&mut game);
        self.store.save_guess(&game)?;

        info!(
            game_id = %id,
            letter = %letter,
            outcome = ?game.outcome(),
            "Guess applied"
        );
        Ok(play_view(&game))
    }

    /// Returns the player-facing view of a game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] for an unknown id, or
    /// [`GameError::Store`] when the lookup fails.
    #[instrument(skip(self))]
    pub fn get_state(&self, id: GameId) -> Result<PlayView, GameError> {
        debug!(game_id = %id, "Loading game state");
        let game = self.store.find_game(id)?.ok_or(GameError::GameNotFound)?;
        Ok(play_view(&game))
    }

    /// Returns the full record of a game, attempt log included.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] for an unknown id, or
    /// [`GameError::Store`] when the lookup fails.
    #[instrument(skip(self))]
    pub fn get_details(&self, id: GameId) -> Result<GameDetails, GameError> {
        debug!(game_id = %id, "Loading game details");
        let game = self.store.find_game(id)?.ok_or(GameError::GameNotFound)?;
        Ok(game_details(&game))
    }

    /// Returns one history row per game, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Store`] when the listing fails.
    #[instrument(skip(self))]
    pub fn list_history(&self) -> Result<Vec<HistorySummary>, GameError> {
        debug!("Listing game history");
        let games = self.store.list_games()?;
        info!(count = games.len(), "History loaded");
        Ok(games.iter().map(history_summary).collect())
    }
}
