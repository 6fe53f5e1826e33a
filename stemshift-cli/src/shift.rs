use anyhow::{Context, Result};
use stemshift_core::{format_summary, shift_operation, Config};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Run the batch in the current directory and print the completion message.
/// Returns how long to pause before exiting.
pub fn handle_shift(config_path: Option<&Path>) -> Result<Duration> {
    let config = load_config(config_path)?;
    let working_dir = std::env::current_dir().context("Failed to get current directory")?;

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let result = shift_operation(&working_dir, &config, &mut input, &mut output)
        .with_context(|| format!("Failed to shift filenames in {}", working_dir.display()))?;
    tracing::info!(renamed = result.renames.len(), "Batch complete");

    write!(output, "{}", format_summary())?;
    output.flush()?;

    Ok(config.exit_delay())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => Config::load_from_path(path)?,
        None => match default_config_path() {
            Some(path) => Config::load_or_default(&path)?,
            None => Config::default(),
        },
    };
    tracing::debug!(?config, "Loaded config");
    Ok(config)
}

/// `<config dir>/stemshift/config.toml`, kept out of the directory being renamed
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stemshift").join("config.toml"))
}
