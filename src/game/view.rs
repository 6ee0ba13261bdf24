//! Read models served over the API and consumed by the terminal client.

use serde::{Deserialize, Serialize};

use super::rules;
use super::types::{Game, GameId};

/// Formatting applied to every timestamp that leaves the domain.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The state of a round as shown to the player.
///
/// The secret word is masked while the game is undecided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayView {
    /// Identifier of the round.
    pub game_id: GameId,
    /// Space-separated word display with unguessed letters masked.
    pub word: String,
    /// Distinct guessed letters in first-guess order.
    pub guessed_letters: Vec<char>,
    /// Distinct guessed letters missing from the word.
    pub incorrect_attempts: usize,
    /// Incorrect guesses allowed before the game is lost.
    pub max_incorrect_attempts: usize,
    /// `None` while undecided, then `true` for a win, `false` for a loss.
    pub win: Option<bool>,
    /// True once the outcome is decided.
    pub is_over: bool,
}

/// One row of the game history listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Identifier of the round.
    pub id: GameId,
    /// The secret word, revealed.
    pub word: String,
    /// Distinct guessed letters in first-guess order.
    pub selected_letters: Vec<char>,
    /// `"yes"`, `"no"`, or `"not completed"`.
    pub win: String,
    /// When the game was started.
    pub datetime: String,
}

/// A single guess in a game's attempt log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptView {
    /// The guessed letter.
    pub letter: char,
    /// When the guess was made.
    pub datetime: String,
}

/// Full record of a finished or running game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDetails {
    /// Identifier of the round.
    pub id: GameId,
    /// The secret word, revealed.
    pub word: String,
    /// Distinct guessed letters in first-guess order.
    pub selected_letters: Vec<char>,
    /// `"yes"`, `"no"`, or `"not completed"`.
    pub win: String,
    /// When the game was started.
    pub datetime: String,
    /// Distinct guessed letters missing from the word.
    pub incorrect_attempts: usize,
    /// Incorrect guesses allowed before the game is lost.
    pub max_incorrect_attempts: usize,
    /// Every guess in the order it was made, repeats included.
    pub attempts: Vec<AttemptView>,
}

/// Space-joins the secret word, masking letters not yet guessed.
///
/// Once the game is over the whole word is revealed.
fn word_display(game: &Game) -> String {
    let over = rules::is_over(game);
    let guessed = game.guessed_letters();
    game.word()
        .text()
        .chars()
        .map(|letter| {
            if over || guessed.contains(&letter.to_ascii_lowercase()) {
                letter.to_string()
            } else {
                "_".to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the player-facing view of a round.
pub fn play_view(game: &Game) -> PlayView {
    PlayView {
        game_id: game.id(),
        word: word_display(game),
        guessed_letters: game.guessed_letters(),
        incorrect_attempts: rules::incorrect_count(game),
        max_incorrect_attempts: Game::MAX_INCORRECT_ATTEMPTS,
        win: game.outcome().win_flag(),
        is_over: rules::is_over(game),
    }
}

/// Builds one history row for a game.
pub fn history_summary(game: &Game) -> HistorySummary {
    HistorySummary {
        id: game.id(),
        word: game.word().text().to_string(),
        selected_letters: game.guessed_letters(),
        win: game.outcome().history_label().to_string(),
        datetime: game.created_at().format(DATETIME_FORMAT).to_string(),
    }
}

/// Builds the full record of a game, attempt log included.
pub fn game_details(game: &Game) -> GameDetails {
    let attempts = game
        .guesses()
        .iter()
        .map(|guess| AttemptView {
            letter: guess.letter(),
            datetime: guess.created_at().format(DATETIME_FORMAT).to_string(),
        })
        .collect();
    GameDetails {
        id: game.id(),
        word: game.word().text().to_string(),
        selected_letters: game.guessed_letters(),
        win: game.outcome().history_label().to_string(),
        datetime: game.created_at().format(DATETIME_FORMAT).to_string(),
        incorrect_attempts: rules::incorrect_count(game),
        max_incorrect_attempts: Game::MAX_INCORRECT_ATTEMPTS,
        attempts,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::game::types::{Guess, Outcome, Word};
    use crate::game::update_outcome;

    fn started_at() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 10, 19)
            .unwrap()
            .and_hms_opt(17, 5, 27)
            .unwrap()
    }

    fn game_with_guesses(word: &str, letters: &[char]) -> Game {
        let guesses = letters
            .iter()
            .map(|letter| Guess::new(*letter, started_at()))
            .collect();
        let mut game = Game::new(
            7,
            Word::new(3, word),
            Outcome::Undecided,
            started_at(),
            guesses,
        );
        update_outcome(&mut game);
        game
    }

    #[test]
    fn test_masks_unguessed_letters() {
        let view = play_view(&game_with_guesses("dog", &['d']));
        assert_eq!(view.word, "d _ _");
        assert_eq!(view.guessed_letters, vec!['d']);
        assert_eq!(view.incorrect_attempts, 0);
        assert_eq!(view.win, None);
        assert!(!view.is_over);
    }

    #[test]
    fn test_reveals_the_word_once_won() {
        let view = play_view(&game_with_guesses("cat", &['c', 'a', 't']));
        assert_eq!(view.word, "c a t");
        assert_eq!(view.win, Some(true));
        assert!(view.is_over);
    }

    #[test]
    fn test_reveals_the_word_once_lost() {
        let view = play_view(&game_with_guesses("cat", &['x', 'y', 'z', 'q', 'w', 'e']));
        assert_eq!(view.word, "c a t");
        assert_eq!(view.incorrect_attempts, 6);
        assert_eq!(view.win, Some(false));
        assert!(view.is_over);
    }

    #[test]
    fn test_unmasks_uppercase_letters_from_lowercase_guesses() {
        let view = play_view(&game_with_guesses("Dog", &['d']));
        assert_eq!(view.word, "D _ _");
    }

    #[test]
    fn test_history_labels_map_from_outcomes() {
        assert_eq!(
            history_summary(&game_with_guesses("dog", &['d'])).win,
            "not completed"
        );
        assert_eq!(
            history_summary(&game_with_guesses("cat", &['c', 'a', 't'])).win,
            "yes"
        );
        assert_eq!(
            history_summary(&game_with_guesses("cat", &['x', 'y', 'z', 'q', 'w', 'e'])).win,
            "no"
        );
    }

    #[test]
    fn test_details_keep_the_full_attempt_log() {
        let details = game_details(&game_with_guesses("cat", &['c', 'x', 'x', 'a', 't']));
        assert_eq!(details.word, "cat");
        assert_eq!(details.selected_letters, vec!['c', 'x', 'a', 't']);
        assert_eq!(details.incorrect_attempts, 1);
        assert_eq!(details.attempts.len(), 5);
        assert_eq!(details.attempts[1].letter, 'x');
        assert_eq!(details.attempts[1].datetime, "2024-10-19 17:05:27");
        assert_eq!(details.win, "yes");
    }
}
