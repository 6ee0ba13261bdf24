//! Terminal client for the hangman server.

mod app;
mod rest_client;
mod ui;

use anyhow::Result;
use app::{App, View};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rest_client::RestGameClient;
use std::io;
use std::time::Duration;
use tracing::{error, info};

/// Run the terminal client against a running hangman server.
///
/// Takes over the terminal with an alternate screen until the player quits
/// with Esc from the play screen.
///
/// # Errors
///
/// Returns an error if the terminal cannot be put into raw mode or the
/// alternate screen cannot be entered or left.
pub async fn run_tui(server_url: String) -> Result<()> {
    // Log to a file so output does not corrupt the alternate screen
    let log_file = std::fs::File::create("hangman_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(server_url = %server_url, "Starting hangman TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let client = RestGameClient::new(server_url);
    let res = run_app(&mut terminal, client).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "TUI loop error");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Main event loop: draw the current screen, then react to one key press.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    client: RestGameClient,
) -> Result<()> {
    let mut app = App::new();
    start_new_game(&mut app, &client).await;

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        match app.view() {
            View::Play => match key.code {
                KeyCode::Esc => {
                    info!("User quit");
                    return Ok(());
                }
                KeyCode::Tab => open_history(&mut app, &client).await,
                KeyCode::Enter => {
                    // Enter only restarts once the current round is decided
                    let over = app.play().map(|view| view.is_over).unwrap_or(true);
                    if over {
                        start_new_game(&mut app, &client).await;
                    }
                }
                KeyCode::Char(letter) if letter.is_ascii_alphabetic() => {
                    submit_guess(&mut app, &client, letter).await;
                }
                _ => {}
            },
            View::History => match key.code {
                KeyCode::Esc | KeyCode::Tab => app.show_current_play(),
                KeyCode::Up => app.select_prev(),
                KeyCode::Down => app.select_next(),
                KeyCode::Enter => open_details(&mut app, &client).await,
                _ => {}
            },
            View::Details => match key.code {
                KeyCode::Esc => app.back_to_history(),
                KeyCode::Tab => app.show_current_play(),
                _ => {}
            },
        }
    }
}

/// Ask the server for a fresh game and switch to the play screen.
async fn start_new_game(app: &mut App, client: &RestGameClient) {
    match client.start_game().await {
        Ok(game_id) => match client.get_state(game_id).await {
            Ok(view) => {
                info!(game_id = view.game_id, "Started new game");
                app.show_play(view);
            }
            Err(err) => app.set_status(format!("Failed to load game: {err}")),
        },
        Err(err) => app.set_status(format!("Failed to start game: {err}")),
    }
}

/// Check the guess locally, then submit it and show the updated round.
async fn submit_guess(app: &mut App, client: &RestGameClient, letter: char) {
    let Some(letter) = app.validate_guess(letter) else {
        return;
    };
    let Some(game_id) = app.play().map(|view| view.game_id) else {
        return;
    };
    match client.guess(game_id, letter).await {
        Ok(view) => app.show_play(view),
        Err(err) => app.set_status(format!("Guess failed: {err}")),
    }
}

/// Load the list of past games and switch to the history screen.
async fn open_history(app: &mut App, client: &RestGameClient) {
    match client.get_history().await {
        Ok(games) => app.show_history(games),
        Err(err) => app.set_status(format!("Failed to load history: {err}")),
    }
}

/// Load the attempt log of the highlighted game.
async fn open_details(app: &mut App, client: &RestGameClient) {
    let Some(game_id) = app.selected_game_id() else {
        return;
    };
    match client.get_details(game_id).await {
        Ok(details) => app.show_details(details),
        Err(err) => app.set_status(format!("Failed to load details: {err}")),
    }
}
