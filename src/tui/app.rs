//! Application state for the terminal client.

use tracing::debug;

use crate::game::{GameDetails, GameId, HistorySummary, PlayView};

/// Screen currently shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Active round with the masked word.
    Play,
    /// Table of every game played.
    History,
    /// Attempt log of one game picked from the history.
    Details,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    view: View,
    play: Option<PlayView>,
    history: Vec<HistorySummary>,
    selected: usize,
    details: Option<GameDetails>,
    status_message: String,
}

impl App {
    /// Creates the application on the play screen with no game yet.
    pub fn new() -> Self {
        Self {
            view: View::Play,
            play: None,
            history: Vec::new(),
            selected: 0,
            details: None,
            status_message: "Starting a new game...".to_string(),
        }
    }

    /// The screen currently shown.
    pub fn view(&self) -> View {
        self.view
    }

    /// The active round, if one was started.
    pub fn play(&self) -> Option<&PlayView> {
        self.play.as_ref()
    }

    /// Loaded history rows.
    pub fn history(&self) -> &[HistorySummary] {
        &self.history
    }

    /// Index of the highlighted history row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The loaded game record, when on the details screen.
    pub fn details(&self) -> Option<&GameDetails> {
        self.details.as_ref()
    }

    /// The current status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Replaces the status line.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Installs a fresh or updated round and switches to the play screen.
    pub fn show_play(&mut self, view: PlayView) {
        debug!(game_id = view.game_id, is_over = view.is_over, "Showing play view");
        self.status_message = if view.is_over {
            match view.win {
                Some(true) => "You won! Press Enter for a new game.".to_string(),
                _ => format!("You lost! The word was \"{}\".", view.word),
            }
        } else {
            format!(
                "Guess a letter ({}/{} misses).",
                view.incorrect_attempts, view.max_incorrect_attempts
            )
        };
        self.play = Some(view);
        self.view = View::Play;
    }

    /// Switches back to the play screen without touching the round.
    pub fn show_current_play(&mut self) {
        self.view = View::Play;
    }

    /// Installs history rows and switches to the history screen.
    pub fn show_history(&mut self, history: Vec<HistorySummary>) {
        debug!(count = history.len(), "Showing history");
        if self.selected >= history.len() {
            self.selected = history.len().saturating_sub(1);
        }
        self.history = history;
        self.view = View::History;
        self.status_message = "Up/Down to select, Enter for details.".to_string();
    }

    /// Installs a game record and switches to the details screen.
    pub fn show_details(&mut self, details: GameDetails) {
        debug!(game_id = details.id, "Showing details");
        self.details = Some(details);
        self.view = View::Details;
        self.status_message = "Esc to go back.".to_string();
    }

    /// Returns to the history screen from details.
    pub fn back_to_history(&mut self) {
        self.view = View::History;
        self.status_message = "Up/Down to select, Enter for details.".to_string();
    }

    /// Moves the history selection down.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.history.len() {
            self.selected += 1;
        }
    }

    /// Moves the history selection up.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Id of the highlighted history row, if any.
    pub fn selected_game_id(&self) -> Option<GameId> {
        self.history.get(self.selected).map(|row| row.id)
    }

    /// Checks a guess against the active round without a server call.
    ///
    /// Returns the lowercase letter to send, or `None` after setting a
    /// status message explaining why the guess was dropped.
    pub fn validate_guess(&mut self, letter: char) -> Option<char> {
        let Some(play) = &self.play else {
            self.status_message = "No active game. Press Enter to start one.".to_string();
            return None;
        };
        if play.is_over {
            self.status_message = "Game is over. Press Enter for a new game.".to_string();
            return None;
        }
        let letter = letter.to_ascii_lowercase();
        if play.guessed_letters.contains(&letter) {
            self.status_message = format!("Letter '{}' already guessed.", letter);
            return None;
        }
        Some(letter)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
