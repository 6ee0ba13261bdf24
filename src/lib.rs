//! Hangman library - word-guessing game over HTTP
//!
//! This library provides a REST API for hangman rounds backed by SQLite,
//! plus a terminal client that plays against it.
//!
//! # Architecture
//!
//! - **Game**: pure rules for scoring guesses and rendering views
//! - **Store**: persistence port with a SQLite repository behind it
//! - **Service**: runs rounds against any store
//! - **Server**: axum REST API over the service
//! - **Tui**: ratatui terminal client speaking to the REST API
//!
//! # Example
//!
//! ```no_run
//! use hangman::{GameRepository, GameService};
//!
//! # fn example() -> anyhow::Result<()> {
//! // Open the word and game store
//! let repository = GameRepository::new("hangman.db".to_string())?;
//! repository.run_migrations()?;
//!
//! // Play a round
//! let service = GameService::new(repository);
//! let game_id = service.start_new_game()?;
//! let view = service.submit_guess(game_id, 'e')?;
//! println!("{}", view.word);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod db;
mod game;
mod server;
mod service;
mod store;
mod tui;

// Crate-level exports - Server configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Database
pub use db::{DbError, GameRepository};

// Crate-level exports - Game rules and views
pub use game::{
    AttemptView, Game, GameDetails, GameId, Guess, HistorySummary, Outcome, PlayView, Word,
    WordId, game_details, history_summary, incorrect_count, is_over, play_view, update_outcome,
};

// Crate-level exports - Orchestration
pub use service::{GameError, GameService, parse_letter};

// Crate-level exports - Persistence port
pub use store::GameStore;

// Crate-level exports - REST API server
pub use server::{build_router, serve};

// Crate-level exports - Terminal client
pub use tui::run_tui;
