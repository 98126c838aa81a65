use std::path::PathBuf;

use anyhow::{Context, Result};

/// Directory name under the platform data dir
pub const APP_DIR_NAME: &str = "github-topics";

/// Per-user data directory holding the history database and log file
///
/// - Linux: `$XDG_DATA_HOME/github-topics` or `~/.local/share/github-topics`
/// - macOS: `~/Library/Application Support/github-topics`
/// - Windows: `%APPDATA%\github-topics`
pub fn get_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine the user data directory")?;
    Ok(base.join(APP_DIR_NAME))
}
