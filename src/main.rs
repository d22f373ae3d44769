//! workout-picker: picks a random kettlebell and core workout and keeps
//! per-workout selection counts in a local SQLite database.

mod app;
mod cli;
mod data;
mod error;
mod logging;

use anyhow::Result;
use cli::{AppConfig, Cli};

fn main() -> Result<()> {
    logging::init_logging();

    let cli = Cli::parse_args();
    let config = AppConfig::from_cli(cli);

    app::run(config)
}
