//! One-shot run: open the store, carry out the command, print, close.

use std::io::{self, Write};

use anyhow::{Context, Result};
use rand::Rng;
use tracing::debug;

use crate::cli::{AppConfig, Commands};
use crate::data::{default_catalogs, CounterStore, CORE, KB};

/// Width of the separator printed after a pick
const SEPARATOR_WIDTH: usize = 30;

/// Run the configured command against stdout with a thread-local rng
pub fn run(config: AppConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(&config, &mut rand::thread_rng(), &mut out)
}

/// Run the configured command with an explicit random source and output
pub fn run_with<R, W>(config: &AppConfig, rng: &mut R, out: &mut W) -> Result<()>
where
    R: Rng + ?Sized,
    W: Write,
{
    // Dropping the store on any early return releases the connection
    let mut store = CounterStore::open(&config.db_path, default_catalogs())
        .with_context(|| format!("Failed to open counter store: {:?}", config.db_path))?;
    debug!(command = ?config.command, path = %store.path().display(), "running");

    match config.command {
        Commands::Pick => {
            let kb_item = store
                .pick_and_increment(KB, rng)
                .context("Failed to pick a kb workout")?;
            let core_item = store
                .pick_and_increment(CORE, rng)
                .context("Failed to pick a core workout")?;

            writeln!(out)?;
            writeln!(out, "Selected Workouts:")?;
            writeln!(out, "KB: {kb_item}")?;
            writeln!(out, "Core: {core_item}")?;
            write!(out, "{}", store.display_counts().context("Failed to read counts")?)?;
            writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        }
        Commands::Show => {
            write!(out, "{}", store.display_counts().context("Failed to read counts")?)?;
        }
        Commands::Reset => {
            store.reset_counts().context("Failed to reset counts")?;
            writeln!(out, "Database counts have been reset to 0")?;
            write!(out, "{}", store.display_counts().context("Failed to read counts")?)?;
        }
    }

    store.close().context("Failed to close counter store")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use tempfile::TempDir;

    use super::*;

    fn run_command(dir: &TempDir, command: Commands) -> String {
        let config = AppConfig {
            db_path: dir.path().join("selection_counts.db"),
            command,
        };
        let mut out = Vec::new();
        run_with(&config, &mut StepRng::new(0, 0), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_pick_output() {
        let dir = TempDir::new().unwrap();
        let output = run_command(&dir, Commands::Pick);

        assert!(output.starts_with("\nSelected Workouts:\nKB: week_01_Twister\nCore: week_01\n"));
        assert!(output.contains("KB Counts:\n  week_01_Twister: 1\n  week_02_Blast: 0\n"));
        assert!(output.contains("\nCore Counts:\n  week_01: 1\n"));
        assert!(output.ends_with(&format!("{}\n", "-".repeat(SEPARATOR_WIDTH))));
    }

    #[test]
    fn test_counts_persist_between_runs() {
        let dir = TempDir::new().unwrap();
        run_command(&dir, Commands::Pick);
        run_command(&dir, Commands::Pick);

        let output = run_command(&dir, Commands::Show);
        assert!(output.contains("  week_01_Twister: 2\n"));
        assert!(output.contains("  week_01: 2\n"));
        assert!(!output.contains("Selected Workouts"));
    }

    #[test]
    fn test_reset_output() {
        let dir = TempDir::new().unwrap();
        run_command(&dir, Commands::Pick);

        let output = run_command(&dir, Commands::Reset);
        assert!(output.starts_with("Database counts have been reset to 0\n"));
        assert!(output.contains("  week_01_Twister: 0\n"));
        assert!(output.contains("  week_01: 0\n"));
    }

    #[test]
    fn test_unopenable_store_fails() {
        let dir = TempDir::new().unwrap();
        // A directory where the database file should be
        let config = AppConfig {
            db_path: dir.path().to_path_buf(),
            command: Commands::Show,
        };
        let mut out = Vec::new();
        let err = run_with(&config, &mut StepRng::new(0, 0), &mut out).unwrap_err();
        assert!(err.to_string().starts_with("Failed to open counter store"));
        assert!(out.is_empty());
    }
}
