//! Command-line interface for hangman.

use clap::{Parser, Subcommand};

/// Hangman - word-guessing game server with a terminal client
#[derive(Parser, Debug)]
#[command(name = "hangman")]
#[command(about = "Word-guessing game server and terminal client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the database file (overrides the config file)
        #[arg(long)]
        db_path: Option<String>,
    },

    /// Run the terminal client
    Tui {
        /// Game server URL
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        server_url: String,
    },

    /// Load words into the database (created if it doesn't exist)
    Seed {
        /// Path to the database file
        #[arg(long, default_value = "hangman.db")]
        db_path: String,

        /// File with one word per line; a built-in list is used if omitted
        #[arg(short, long)]
        file: Option<std::path::PathBuf>,
    },
}
