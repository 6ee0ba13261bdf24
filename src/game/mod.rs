//! Hangman domain: game state, guess evaluation, and read models.

mod rules;
mod types;
mod view;

pub use rules::{incorrect_count, is_over, update_outcome};
pub use types::{Game, GameId, Guess, Outcome, Word, WordId};
pub use view::{
    AttemptView, GameDetails, HistorySummary, PlayView, game_details, history_summary, play_view,
};
