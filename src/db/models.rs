//! Database models and their conversions into domain values.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::{DbError, schema};
use crate::game::{Game, Guess, Outcome, Word};

/// Word table row.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::words)]
pub struct WordRow {
    id: i32,
    word: String,
}

impl WordRow {
    /// Converts the row into a domain word.
    pub fn into_word(self) -> Word {
        Word::new(self.id, self.word)
    }
}

/// Insertable word model for seeding the word store.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::words)]
pub struct NewWordRow {
    word: String,
}

/// Game table row.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable, Getters)]
#[diesel(table_name = schema::games)]
#[diesel(belongs_to(WordRow, foreign_key = word_id))]
pub struct GameRow {
    id: i32,
    word_id: i32,
    win: Option<bool>,
    created_at: NaiveDateTime,
}

impl GameRow {
    /// Assembles a domain game from the row, its word, and its attempts.
    ///
    /// Attempts must be in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if an attempt row holds an invalid letter.
    pub fn into_game(self, word: Word, attempts: Vec<AttemptRow>) -> Result<Game, DbError> {
        let guesses = attempts
            .into_iter()
            .map(|attempt| attempt.into_guess())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Game::new(
            self.id,
            word,
            Outcome::from_win_flag(self.win),
            self.created_at,
            guesses,
        ))
    }
}

/// Insertable game model for starting a new round.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::games)]
pub struct NewGameRow {
    word_id: i32,
    win: Option<bool>,
    created_at: NaiveDateTime,
}

/// Guess table row.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable, Getters)]
#[diesel(table_name = schema::game_attempts)]
#[diesel(belongs_to(GameRow, foreign_key = game_id))]
pub struct AttemptRow {
    id: i32,
    game_id: i32,
    letter: String,
    created_at: NaiveDateTime,
}

impl AttemptRow {
    /// Converts the row into a domain guess.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the stored letter is not a single character.
    pub fn into_guess(self) -> Result<Guess, DbError> {
        let mut chars = self.letter.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Ok(Guess::new(letter, self.created_at)),
            _ => Err(DbError::new(format!(
                "Invalid letter '{}' in attempt {}",
                self.letter, self.id
            ))),
        }
    }
}

/// Insertable attempt model for recording a guess.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::game_attempts)]
pub struct NewAttemptRow {
    game_id: i32,
    letter: String,
    created_at: NaiveDateTime,
}
