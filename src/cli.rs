//! Command-line interface argument parsing for workout-picker.
//!
//! - `workout-picker` picks one kb and one core workout (same as `pick`)
//! - `workout-picker show` prints the counts without picking
//! - `workout-picker reset` sets every count back to zero
//! - `--db-path <PATH>` overrides where the counts are stored

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// File name of the counter database
const DB_FILE_NAME: &str = "selection_counts.db";

/// Picks a random kettlebell and core workout and tracks how often each comes up.
#[derive(Parser, Debug)]
#[command(name = "workout-picker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the counter database.
    /// Defaults to <data dir>/workout-picker/selection_counts.db
    #[arg(long, global = true)]
    pub db_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Pick one workout from each catalog and print the counts
    Pick,
    /// Print the counts without picking anything
    Show,
    /// Reset every count to zero
    Reset,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub command: Commands,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Self {
        let db_path = cli.db_path.unwrap_or_else(default_db_path);

        AppConfig {
            db_path,
            command: cli.command.unwrap_or(Commands::Pick),
        }
    }
}

fn default_db_path() -> PathBuf {
    match dirs::data_local_dir() {
        Some(dir) => dir.join("workout-picker").join(DB_FILE_NAME),
        None => PathBuf::from(DB_FILE_NAME),
    }
}
