//! Core value types for a hangman round.

use chrono::NaiveDateTime;

/// Identifier of a persisted game.
pub type GameId = i32;
/// Identifier of a word in the word store.
pub type WordId = i32;

/// A secret word drawn from the word store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    id: WordId,
    text: String,
}

impl Word {
    /// Creates a word with its store identifier.
    pub fn new(id: WordId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// The store identifier.
    pub fn id(&self) -> WordId {
        self.id
    }

    /// The secret text, stored in its original casing.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A single recorded guess.
///
/// The letter is always a lowercase ASCII character; the boundary folds
/// input before a guess reaches the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    letter: char,
    created_at: NaiveDateTime,
}

impl Guess {
    /// Creates a guess made at the given instant.
    pub fn new(letter: char, created_at: NaiveDateTime) -> Self {
        Self { letter, created_at }
    }

    /// The guessed letter.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// When the guess was recorded.
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}

/// Terminal status of a game.
///
/// A game starts `Undecided` and transitions at most once, to `Won` or
/// `Lost`. The transition is owned by [`update_outcome`].
///
/// [`update_outcome`]: super::update_outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Still in play.
    #[default]
    Undecided,
    /// Every letter of the word was guessed.
    Won,
    /// The incorrect-guess limit was reached first.
    Lost,
}

impl Outcome {
    /// Maps the stored nullable win flag to an outcome.
    pub fn from_win_flag(flag: Option<bool>) -> Self {
        match flag {
            None => Self::Undecided,
            Some(true) => Self::Won,
            Some(false) => Self::Lost,
        }
    }

    /// The nullable win flag persisted for this outcome.
    pub fn win_flag(self) -> Option<bool> {
        match self {
            Self::Undecided => None,
            Self::Won => Some(true),
            Self::Lost => Some(false),
        }
    }

    /// The label shown in game history listings.
    pub fn history_label(self) -> &'static str {
        match self {
            Self::Undecided => "not completed",
            Self::Won => "yes",
            Self::Lost => "no",
        }
    }

    /// True once the game has been won or lost.
    pub fn is_decided(self) -> bool {
        !matches!(self, Self::Undecided)
    }
}

/// A hangman round: the secret word plus everything guessed so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: GameId,
    word: Word,
    outcome: Outcome,
    created_at: NaiveDateTime,
    guesses: Vec<Guess>,
}

impl Game {
    /// Incorrect guesses allowed before the game is lost.
    pub const MAX_INCORRECT_ATTEMPTS: usize = 6;

    /// Rebuilds a game from its persisted parts.
    ///
    /// Guesses must be in the order they were made.
    pub fn new(
        id: GameId,
        word: Word,
        outcome: Outcome,
        created_at: NaiveDateTime,
        guesses: Vec<Guess>,
    ) -> Self {
        Self {
            id,
            word,
            outcome,
            created_at,
            guesses,
        }
    }

    /// The game identifier.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// The secret word.
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// The current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// When the game was started.
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// All guesses in the order they were made, repeats included.
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Distinct guessed letters in first-guess order.
    pub fn guessed_letters(&self) -> Vec<char> {
        let mut letters = Vec::new();
        for guess in &self.guesses {
            if !letters.contains(&guess.letter()) {
                letters.push(guess.letter());
            }
        }
        letters
    }

    /// True if the letter was guessed before.
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guesses.iter().any(|guess| guess.letter() == letter)
    }

    /// Appends a guess to the round.
    pub fn push_guess(&mut self, guess: Guess) {
        self.guesses.push(guess);
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }
}
