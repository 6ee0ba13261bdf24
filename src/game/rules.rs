//! Guess evaluation: incorrect-attempt counting and win/loss decisions.

use std::collections::HashSet;

use tracing::{debug, instrument};

use super::types::{Game, Outcome, Word};

/// Distinct lowercase letters of the secret word.
fn word_letters(word: &Word) -> HashSet<char> {
    word.text().to_ascii_lowercase().chars().collect()
}

/// Number of distinct guessed letters that do not appear in the word.
///
/// Repeated wrong guesses of the same letter count once; comparison is
/// against the lowercased word.
#[instrument(skip(game))]
pub fn incorrect_count(game: &Game) -> usize {
    let letters = word_letters(game.word());
    game.guessed_letters()
        .into_iter()
        .filter(|letter| !letters.contains(letter))
        .count()
}

/// Word letters that have not been guessed yet.
fn remaining_letters(game: &Game) -> HashSet<char> {
    let mut letters = word_letters(game.word());
    for guessed in game.guessed_letters() {
        letters.remove(&guessed);
    }
    letters
}

/// True once the game has a decided outcome.
#[instrument(skip(game))]
pub fn is_over(game: &Game) -> bool {
    game.outcome().is_decided()
}

/// Re-evaluates the outcome after a guess.
///
/// A decided game is left untouched. Otherwise the win condition is
/// checked before the loss condition, so a final guess that both
/// completes the word and lands on the attempt limit wins.
#[instrument(skip(game), fields(game_id = game.id()))]
pub fn update_outcome(game: &mut Game) {
    if is_over(game) {
        return;
    }
    if remaining_letters(game).is_empty() {
        debug!(game_id = game.id(), "Word fully guessed");
        game.set_outcome(Outcome::Won);
    } else if incorrect_count(game) >= Game::MAX_INCORRECT_ATTEMPTS {
        debug!(game_id = game.id(), "Incorrect attempt limit reached");
        game.set_outcome(Outcome::Lost);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::game::types::Guess;

    fn now() -> NaiveDateTime {
        chrono::Utc::now().naive_utc()
    }

    fn game_with_guesses(word: &str, letters: &[char]) -> Game {
        let guesses = letters
            .iter()
            .map(|letter| Guess::new(*letter, now()))
            .collect();
        Game::new(1, Word::new(1, word), Outcome::Undecided, now(), guesses)
    }

    #[test]
    fn test_incorrect_count_ignores_repeats_and_hits() {
        let game = game_with_guesses("cat", &['c', 'x', 'x', 'y', 'a']);
        assert_eq!(incorrect_count(&game), 2);
    }

    #[test]
    fn test_incorrect_count_folds_word_case() {
        let game = game_with_guesses("Cat", &['c', 'a', 't']);
        assert_eq!(incorrect_count(&game), 0);
    }

    #[test]
    fn test_guessing_every_letter_wins() {
        let mut game = game_with_guesses("cat", &['c', 'a', 't']);
        update_outcome(&mut game);
        assert_eq!(game.outcome(), Outcome::Won);
        assert!(is_over(&game));
    }

    #[test]
    fn test_reaching_the_limit_loses() {
        let mut game = game_with_guesses("cat", &['x', 'y', 'z', 'q', 'w', 'e']);
        update_outcome(&mut game);
        assert_eq!(game.outcome(), Outcome::Lost);
        assert_eq!(incorrect_count(&game), Game::MAX_INCORRECT_ATTEMPTS);
    }

    #[test]
    fn test_completing_the_word_on_the_last_allowed_miss_wins() {
        let mut game = game_with_guesses("cat", &['x', 'y', 'z', 'q', 'w', 'c', 'a', 'e', 't']);
        update_outcome(&mut game);
        assert_eq!(game.outcome(), Outcome::Won);
    }

    #[test]
    fn test_decided_outcome_is_sticky() {
        let mut game = game_with_guesses("cat", &['c', 'a', 't']);
        update_outcome(&mut game);
        assert_eq!(game.outcome(), Outcome::Won);

        game.push_guess(Guess::new('x', now()));
        update_outcome(&mut game);
        assert_eq!(game.outcome(), Outcome::Won);
    }

    #[test]
    fn test_partial_progress_stays_undecided() {
        let mut game = game_with_guesses("dog", &['d']);
        update_outcome(&mut game);
        assert_eq!(game.outcome(), Outcome::Undecided);
        assert!(!is_over(&game));
    }
}
