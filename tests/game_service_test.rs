//! Tests for the game service against an in-memory store.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;

use hangman::{DbError, Game, GameError, GameId, GameService, GameStore, Outcome, Word};

/// In-memory store standing in for the SQLite repository.
///
/// Picks words in insertion order so tests know which word a game is on.
#[derive(Debug, Default)]
struct MemoryStore {
    words: Vec<Word>,
    games: Mutex<HashMap<GameId, Game>>,
}

impl MemoryStore {
    fn with_words(words: &[&str]) -> Self {
        let words = words
            .iter()
            .enumerate()
            .map(|(i, text)| Word::new(i as i32 + 1, *text))
            .collect();
        Self {
            words,
            games: Mutex::new(HashMap::new()),
        }
    }
}

impl GameStore for MemoryStore {
    fn find_random_word(&self) -> Result<Option<Word>, DbError> {
        Ok(self.words.first().cloned())
    }

    fn create_game(&self, word: &Word) -> Result<Game, DbError> {
        let mut games = self.games.lock().expect("Lock poisoned");
        let id = games.len() as GameId + 1;
        let game = Game::new(
            id,
            word.clone(),
            Outcome::default(),
            Utc::now().naive_utc(),
            Vec::new(),
        );
        games.insert(id, game.clone());
        Ok(game)
    }

    fn find_game(&self, id: GameId) -> Result<Option<Game>, DbError> {
        Ok(self.games.lock().expect("Lock poisoned").get(&id).cloned())
    }

    fn save_guess(&self, game: &Game) -> Result<(), DbError> {
        self.games
            .lock()
            .expect("Lock poisoned")
            .insert(game.id(), game.clone());
        Ok(())
    }

    fn list_games(&self) -> Result<Vec<Game>, DbError> {
        let games = self.games.lock().expect("Lock poisoned");
        let mut all: Vec<Game> = games.values().cloned().collect();
        all.sort_by_key(|game| game.id());
        Ok(all)
    }
}

fn service_on(words: &[&str]) -> GameService<MemoryStore> {
    GameService::new(MemoryStore::with_words(words))
}

#[test]
fn test_start_new_game_returns_its_id() {
    let service = service_on(&["cat"]);
    let game_id = service.start_new_game().expect("Start failed");
    assert_eq!(game_id, 1);

    let view = service.get_state(game_id).expect("State failed");
    assert_eq!(view.word, "_ _ _");
    assert_eq!(view.incorrect_attempts, 0);
    assert_eq!(view.max_incorrect_attempts, 6);
    assert_eq!(view.win, None);
    assert!(!view.is_over);
}

#[test]
fn test_start_new_game_with_empty_word_store_fails() {
    let service = service_on(&[]);
    let result = service.start_new_game();
    assert!(matches!(result, Err(GameError::NoWordsAvailable)));
    assert_eq!(result.unwrap_err().to_string(), "No words available");
}

#[test]
fn test_submit_guess_reveals_matching_letters() {
    let service = service_on(&["dog"]);
    let game_id = service.start_new_game().expect("Start failed");

    let view = service.submit_guess(game_id, 'd').expect("Guess failed");
    assert_eq!(view.word, "d _ _");
    assert_eq!(view.guessed_letters, vec!['d']);
    assert_eq!(view.incorrect_attempts, 0);
    assert_eq!(view.win, None);
    assert!(!view.is_over);
}

#[test]
fn test_submit_guess_counts_misses() {
    let service = service_on(&["dog"]);
    let game_id = service.start_new_game().expect("Start failed");

    let view = service.submit_guess(game_id, 'x').expect("Guess failed");
    assert_eq!(view.word, "_ _ _");
    assert_eq!(view.incorrect_attempts, 1);
    assert!(!view.is_over);
}

#[test]
fn test_guessing_the_whole_word_wins() {
    let service = service_on(&["cat"]);
    let game_id = service.start_new_game().expect("Start failed");

    service.submit_guess(game_id, 'c').expect("Guess failed");
    service.submit_guess(game_id, 'a').expect("Guess failed");
    let view = service.submit_guess(game_id, 't').expect("Guess failed");

    assert_eq!(view.word, "c a t");
    assert_eq!(view.win, Some(true));
    assert!(view.is_over);
}

#[test]
fn test_six_misses_lose_and_reveal_the_word() {
    let service = service_on(&["cat"]);
    let game_id = service.start_new_game().expect("Start failed");

    let mut view = service.get_state(game_id).expect("State failed");
    for letter in ['b', 'd', 'e', 'f', 'g', 'h'] {
        view = service.submit_guess(game_id, letter).expect("Guess failed");
    }

    assert_eq!(view.word, "c a t");
    assert_eq!(view.incorrect_attempts, 6);
    assert_eq!(view.win, Some(false));
    assert!(view.is_over);
}

#[test]
fn test_submit_guess_unknown_game() {
    let service = service_on(&["cat"]);
    let result = service.submit_guess(42, 'a');
    assert!(matches!(result, Err(GameError::GameNotFound)));
    assert_eq!(result.unwrap_err().to_string(), "Game not found");
}

#[test]
fn test_submit_guess_after_the_game_is_over() {
    let service = service_on(&["cat"]);
    let game_id = service.start_new_game().expect("Start failed");
    for letter in ['c', 'a', 't'] {
        service.submit_guess(game_id, letter).expect("Guess failed");
    }

    let result = service.submit_guess(game_id, 'x');
    assert!(matches!(result, Err(GameError::GameAlreadyOver)));
    assert_eq!(result.unwrap_err().to_string(), "Game is over");

    // The decided outcome stays on the record
    let view = service.get_state(game_id).expect("State failed");
    assert_eq!(view.win, Some(true));
}

#[test]
fn test_submit_guess_rejects_repeats_case_insensitively() {
    let service = service_on(&["cat"]);
    let game_id = service.start_new_game().expect("Start failed");
    service.submit_guess(game_id, 'c').expect("Guess failed");

    let repeat = service.submit_guess(game_id, 'C');
    assert!(matches!(repeat, Err(GameError::LetterAlreadyGuessed)));
    assert_eq!(repeat.unwrap_err().to_string(), "Letter already guessed");

    // The rejected repeat is not recorded
    let view = service.get_state(game_id).expect("State failed");
    assert_eq!(view.guessed_letters, vec!['c']);
}

#[test]
fn test_get_state_unknown_game() {
    let service = service_on(&["cat"]);
    let result = service.get_state(7);
    assert!(matches!(result, Err(GameError::GameNotFound)));
}

#[test]
fn test_get_details_lists_attempts_in_order() {
    let service = service_on(&["cat"]);
    let game_id = service.start_new_game().expect("Start failed");
    for letter in ['x', 'c', 'a'] {
        service.submit_guess(game_id, letter).expect("Guess failed");
    }

    let details = service.get_details(game_id).expect("Details failed");
    assert_eq!(details.id, game_id);
    assert_eq!(details.word, "cat");
    assert_eq!(details.selected_letters, vec!['x', 'c', 'a']);
    assert_eq!(details.incorrect_attempts, 1);
    assert_eq!(details.win, "not completed");

    let letters: Vec<char> = details.attempts.iter().map(|a| a.letter).collect();
    assert_eq!(letters, vec!['x', 'c', 'a']);
}

#[test]
fn test_list_history_labels_each_game() {
    let service = service_on(&["cat"]);

    let won = service.start_new_game().expect("Start failed");
    for letter in ['c', 'a', 't'] {
        service.submit_guess(won, letter).expect("Guess failed");
    }
    let running = service.start_new_game().expect("Start failed");
    service.submit_guess(running, 'x').expect("Guess failed");

    let history = service.list_history().expect("History failed");
    assert_eq!(history.len(), 2);

    assert_eq!(history[0].id, won);
    assert_eq!(history[0].word, "cat");
    assert_eq!(history[0].win, "yes");
    assert_eq!(history[0].selected_letters, vec!['c', 'a', 't']);

    assert_eq!(history[1].id, running);
    assert_eq!(history[1].win, "not completed");
    assert_eq!(history[1].selected_letters, vec!['x']);
}
