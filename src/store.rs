//! Storage port for games and words.

use crate::db::DbError;
use crate::game::{Game, GameId, Word};

/// Persistence operations the game service needs.
///
/// The service works on plain [`Game`] values and hands them back to the
/// store to persist; implementations decide how rounds are laid out on
/// disk. [`crate::db::GameRepository`] is the SQLite implementation, and
/// tests swap in an in-memory store.
pub trait GameStore: Send + Sync {
    /// Picks a random word from the store, or `None` when it is empty.
    ///
    /// # Errors
    ///
    /// Returns a [`DbError`] when the lookup fails.
    fn find_random_word(&self) -> Result<Option<Word>, DbError>;

    /// Persists a new game for the given word and returns it.
    ///
    /// # Errors
    ///
    /// Returns a [`DbError`] when the insert fails.
    fn create_game(&self, word: &Word) -> Result<Game, DbError>;

    /// Loads a game with its full guess log, or `None` when the id is
    /// unknown.
    ///
    /// # Errors
    ///
    /// Returns a [`DbError`] when the lookup fails.
    fn find_game(&self, id: GameId) -> Result<Option<Game>, DbError>;

    /// Persists the game's most recent guess together with its outcome.
    ///
    /// Both writes land in one transaction so a stored guess is never
    /// separated from the outcome it produced.
    ///
    /// # Errors
    ///
    /// Returns a [`DbError`] when the write fails.
    fn save_guess(&self, game: &Game) -> Result<(), DbError>;

    /// Lists every game, oldest first, with guess logs attached.
    ///
    /// # Errors
    ///
    /// Returns a [`DbError`] when the listing fails.
    fn list_games(&self) -> Result<Vec<Game>, DbError>;
}
