//! SQLite persistence layer for the word store and game records.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only

pub use error::DbError;
pub use models::{AttemptRow, GameRow, NewAttemptRow, NewGameRow, NewWordRow, WordRow};
pub use repository::GameRepository;
