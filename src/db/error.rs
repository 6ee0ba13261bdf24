//! Error type for the persistence layer.

use derive_more::{Display, Error};
use tracing::instrument;

/// Failure in the SQLite store, tagged with where it was raised.
#[derive(Debug, Clone, Display, Error)]
#[display("Database error: {} at {}:{}", message, file, line)]
pub struct DbError {
    /// What went wrong.
    pub message: String,
    /// Line that raised the error.
    pub line: u32,
    /// Source file that raised the error.
    pub file: &'static str,
}

impl DbError {
    /// Creates a database error tagged with the caller's location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<diesel::result::Error> for DbError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        Self::new(format!("Diesel error: {}", err))
    }
}
