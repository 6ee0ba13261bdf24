//! SQLite-backed repository for words, games, and guesses.

use chrono::Utc;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::{
    AttemptRow, DbError, GameRow, NewAttemptRow, NewGameRow, NewWordRow, WordRow, schema,
};
use crate::game::{Game, GameId, Word};
use crate::store::GameStore;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

diesel::define_sql_function! {
    /// SQLite `RANDOM()`, used to order the word pick.
    fn random() -> Integer
}

/// Database repository for hangman rounds.
#[derive(Debug, Clone)]
pub struct GameRepository {
    db_path: String,
}

impl GameRepository {
    /// Creates a repository for the SQLite database at the given path.
    ///
    /// The file is created on first connection; `":memory:"` gives a
    /// throwaway in-memory database.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the path is invalid.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Creating GameRepository");
        Ok(Self { db_path })
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Applies any pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a migration fails to apply.
    #[instrument(skip(self))]
    pub fn run_migrations(&self) -> Result<(), DbError> {
        let mut conn = self.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Migration error: {}", e)))?;
        if applied.is_empty() {
            debug!("Schema up to date");
        } else {
            info!(count = applied.len(), "Migrations applied");
        }
        Ok(())
    }

    /// Adds words to the word store, returning how many were inserted.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, words), fields(count = words.len()))]
    pub fn insert_words(&self, words: &[String]) -> Result<usize, DbError> {
        debug!("Inserting words");
        let mut conn = self.connection()?;

        let rows: Vec<NewWordRow> = words
            .iter()
            .map(|word| NewWordRow::new(word.clone()))
            .collect();
        let inserted = diesel::insert_into(schema::words::table)
            .values(&rows)
            .execute(&mut conn)?;

        info!(inserted, "Words inserted");
        Ok(inserted)
    }
}

impl GameStore for GameRepository {
    #[instrument(skip(self))]
    fn find_random_word(&self) -> Result<Option<Word>, DbError> {
        debug!("Picking a random word");
        let mut conn = self.connection()?;

        let row = schema::words::table
            .order(random())
            .first::<WordRow>(&mut conn)
            .optional()?;

        if let Some(ref word) = row {
            debug!(word_id = word.id(), "Word picked");
        } else {
            debug!("Word store is empty");
        }

        Ok(row.map(WordRow::into_word))
    }

    #[instrument(skip(self, word), fields(word_id = word.id()))]
    fn create_game(&self, word: &Word) -> Result<Game, DbError> {
        debug!("Creating game");
        let mut conn = self.connection()?;

        let new_game = NewGameRow::new(word.id(), None, Utc::now().naive_utc());
        let row = diesel::insert_into(schema::games::table)
            .values(&new_game)
            .returning(GameRow::as_returning())
            .get_result::<GameRow>(&mut conn)?;

        info!(game_id = row.id(), word_id = word.id(), "Game created");
        row.into_game(word.clone(), Vec::new())
    }

    #[instrument(skip(self))]
    fn find_game(&self, id: GameId) -> Result<Option<Game>, DbError> {
        debug!(game_id = %id, "Loading game");
        let mut conn = self.connection()?;

        let Some(game_row) = schema::games::table
            .find(id)
            .first::<GameRow>(&mut conn)
            .optional()?
        else {
            debug!(game_id = %id, "Game not found");
            return Ok(None);
        };

        let word_row = schema::words::table
            .find(*game_row.word_id())
            .first::<WordRow>(&mut conn)?;
        let attempts = schema::game_attempts::table
            .filter(schema::game_attempts::game_id.eq(id))
            .order(schema::game_attempts::id.asc())
            .load::<AttemptRow>(&mut conn)?;

        debug!(game_id = %id, attempts = attempts.len(), "Game loaded");
        game_row.into_game(word_row.into_word(), attempts).map(Some)
    }

    #[instrument(skip(self, game), fields(game_id = game.id()))]
    fn save_guess(&self, game: &Game) -> Result<(), DbError> {
        let Some(guess) = game.guesses().last() else {
            return Err(DbError::new(format!(
                "Game {} has no guess to save",
                game.id()
            )));
        };
        debug!(letter = %guess.letter(), "Saving guess");
        let mut conn = self.connection()?;

        conn.transaction::<_, DbError, _>(|conn| {
            let attempt = NewAttemptRow::new(
                game.id(),
                guess.letter().to_string(),
                guess.created_at(),
            );
            diesel::insert_into(schema::game_attempts::table)
                .values(&attempt)
                .execute(conn)?;
            diesel::update(schema::games::table.find(game.id()))
                .set(schema::games::win.eq(game.outcome().win_flag()))
                .execute(conn)?;
            Ok(())
        })?;

        info!(
            game_id = game.id(),
            letter = %guess.letter(),
            win = ?game.outcome().win_flag(),
            "Guess saved"
        );
        Ok(())
    }

    #[instrument(skip(self))]
    fn list_games(&self) -> Result<Vec<Game>, DbError> {
        debug!("Listing games");
        let mut conn = self.connection()?;

        let rows = schema::games::table
            .inner_join(schema::words::table)
            .select((GameRow::as_select(), WordRow::as_select()))
            .order(schema::games::id.asc())
            .load::<(GameRow, WordRow)>(&mut conn)?;
        let (game_rows, word_rows): (Vec<GameRow>, Vec<WordRow>) = rows.into_iter().unzip();

        let attempt_groups = AttemptRow::belonging_to(&game_rows)
            .order(schema::game_attempts::id.asc())
            .load::<AttemptRow>(&mut conn)?
            .grouped_by(&game_rows);

        let mut games = Vec::with_capacity(game_rows.len());
        for ((game_row, word_row), attempts) in
            game_rows.into_iter().zip(word_rows).zip(attempt_groups)
        {
            games.push(game_row.into_game(word_row.into_word(), attempts)?);
        }

        info!(count = games.len(), "Games loaded");
        Ok(games)
    }
}
