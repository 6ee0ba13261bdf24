//! Stateless UI rendering for the hangman screens.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::game::PlayView;

use super::app::{App, View};

/// Renders the active screen.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.view() {
        View::Play => draw_play(frame, app),
        View::History => draw_history(frame, app),
        View::Details => draw_details(frame, app),
    }
}

fn draw_play(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Word
            Constraint::Length(3), // Guessed letters
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Hangman")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    match app.play() {
        Some(play) => draw_word(frame, chunks[1], play),
        None => {
            let empty = Paragraph::new("No active game. Press Enter to start one.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, center_rect(chunks[1], 60, 1));
        }
    }

    let guessed = match app.play() {
        Some(play) if !play.guessed_letters.is_empty() => format!(
            "Guessed: {}   Misses: {}/{}",
            join_letters(&play.guessed_letters),
            play.incorrect_attempts,
            play.max_incorrect_attempts
        ),
        Some(play) => format!(
            "Guessed: none   Misses: {}/{}",
            play.incorrect_attempts, play.max_incorrect_attempts
        ),
        None => String::new(),
    };
    let guessed = Paragraph::new(guessed)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Letters"));
    frame.render_widget(guessed, chunks[2]);

    draw_status(frame, chunks[3], app);
    draw_help(
        frame,
        chunks[4],
        "Type a letter to guess | Enter: new game | Tab: history | Esc: quit",
    );
}

fn draw_word(frame: &mut Frame, area: Rect, play: &PlayView) {
    let color = match play.win {
        Some(true) => Color::Green,
        Some(false) => Color::Red,
        None => Color::White,
    };
    let word = Paragraph::new(play.word.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(word, center_rect(area, 60, 1));
}

fn draw_history(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Table
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Game History")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    if app.history().is_empty() {
        let empty = Paragraph::new("No games played yet")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Games"));
        frame.render_widget(empty, chunks[1]);
    } else {
        let header = Row::new(vec![
            Cell::from("Id").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Word").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Guessed").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Won").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Started").style(Style::default().add_modifier(Modifier::BOLD)),
        ])
        .style(Style::default().fg(Color::Yellow));

        let rows: Vec<Row> = app
            .history()
            .iter()
            .map(|game| {
                Row::new(vec![
                    Cell::from(game.id.to_string()),
                    Cell::from(game.word.as_str()),
                    Cell::from(join_letters(&game.selected_letters).to_uppercase()),
                    Cell::from(game.win.as_str())
                        .style(Style::default().fg(outcome_color(&game.win))),
                    Cell::from(game.datetime.as_str()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Percentage(8),
            Constraint::Percentage(22),
            Constraint::Percentage(35),
            Constraint::Percentage(15),
            Constraint::Percentage(20),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("Games"))
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = TableState::default();
        state.select(Some(app.selected()));
        frame.render_stateful_widget(table, chunks[1], &mut state);
    }

    draw_status(frame, chunks[2], app);
    draw_help(
        frame,
        chunks[3],
        "Up/Down: select | Enter: details | Tab: play | Esc: back",
    );
}

fn draw_details(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(6), // Summary
            Constraint::Min(5),    // Attempts
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let Some(details) = app.details() else {
        let empty = Paragraph::new("No game selected")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, chunks[1]);
        draw_help(frame, chunks[3], "Esc: back");
        return;
    };

    let title = Paragraph::new(format!("Game {}", details.id))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let summary_lines = vec![
        Line::from(format!("Word: {}", details.word)),
        Line::from(format!(
            "Guessed: {}",
            join_letters(&details.selected_letters).to_uppercase()
        )),
        Line::from(format!(
            "Misses: {}/{}",
            details.incorrect_attempts, details.max_incorrect_attempts
        )),
        Line::from(format!("Won: {}   Started: {}", details.win, details.datetime)),
    ];
    let summary = Paragraph::new(summary_lines)
        .style(Style::default().fg(outcome_color(&details.win)))
        .block(Block::default().borders(Borders::ALL).title("Summary"));
    frame.render_widget(summary, chunks[1]);

    let header = Row::new(vec![
        Cell::from("#").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Letter").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Time").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow));

    let rows: Vec<Row> = details
        .attempts
        .iter()
        .enumerate()
        .map(|(i, attempt)| {
            Row::new(vec![
                Cell::from((i + 1).to_string()),
                Cell::from(attempt.letter.to_ascii_uppercase().to_string()),
                Cell::from(attempt.datetime.as_str()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(10),
        Constraint::Percentage(20),
        Constraint::Percentage(70),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Attempts"));
    frame.render_widget(table, chunks[2]);

    draw_help(frame, chunks[3], "Esc: back to history | Tab: play");
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_help(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn outcome_color(label: &str) -> Color {
    match label {
        "yes" => Color::Green,
        "no" => Color::Red,
        _ => Color::Yellow,
    }
}

fn join_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
