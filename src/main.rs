//! Hangman - Unified CLI
//!
//! Word-guessing game server with a REST API and a terminal client.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use hangman::{GameRepository, GameService, ServerConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Words loaded by `seed` when no file is given.
const DEFAULT_WORDS: &[&str] = &[
    "anchor", "bicycle", "cabbage", "dolphin", "elephant", "firefly", "glacier", "harvest",
    "island", "jigsaw", "kitchen", "lantern", "meadow", "nutmeg", "orchard", "penguin", "quarry",
    "rainbow", "saddle", "thimble", "umbrella", "volcano", "walnut", "xylophone", "yonder",
    "zephyr",
];

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            db_path,
        } => run_serve(config, host, port, db_path).await,
        Command::Tui { server_url } => hangman::run_tui(server_url).await,
        Command::Seed { db_path, file } => run_seed(db_path, file),
    }
}

/// Run the HTTP game server
async fn run_serve(
    config: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    db_path: Option<String>,
) -> Result<()> {
    init_tracing();

    let config = match config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    }
    .with_overrides(host, port, db_path);

    info!(db_path = %config.db_path(), "Opening database");
    let repository = GameRepository::new(config.db_path().clone())?;
    repository.run_migrations()?;

    let addr = config.socket_addr()?;
    let service = GameService::new(repository);
    hangman::serve(addr, service).await
}

/// Load words into the database
fn run_seed(db_path: String, file: Option<PathBuf>) -> Result<()> {
    init_tracing();

    let words: Vec<String> = match file {
        Some(path) => {
            info!(path = %path.display(), "Reading word list");
            std::fs::read_to_string(&path)?
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        }
        None => DEFAULT_WORDS.iter().map(|word| word.to_string()).collect(),
    };

    let mut unique: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        if !unique.contains(&word) {
            unique.push(word);
        }
    }

    let repository = GameRepository::new(db_path)?;
    repository.run_migrations()?;
    let inserted = repository.insert_words(&unique)?;

    println!("Inserted {inserted} words");
    Ok(())
}

/// Set up console logging from `RUST_LOG`, defaulting to `info`.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
