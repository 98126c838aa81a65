//! Runtime configuration.
//!
//! There is no configuration file: defaults come from the per-user data
//! directory and the public GitHub API, and command-line flags override them.
//! View options travel inside [`AppConfig`] to the renderer explicitly.

use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::github::DEFAULT_API_URL;
use crate::utils::{default_database_path, default_log_path};

/// Presentation switches handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    pub dark_theme: bool,
    pub show_icons: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { dark_theme: true, show_icons: true }
    }
}

impl ViewConfig {
    pub fn toggle_theme(&mut self) {
        self.dark_theme = !self.dark_theme;
    }

    pub fn toggle_icons(&mut self) {
        self.show_icons = !self.show_icons;
    }
}

/// Values supplied on the command line; `None` means "use the default"
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub database_path: Option<PathBuf>,
    pub api_base_url: Option<String>,
    pub log_path: Option<PathBuf>,
    pub light_theme: bool,
    pub hide_icons: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub api_base_url: String,
    pub log_path: PathBuf,
    pub view: ViewConfig,
}

impl AppConfig {
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let database_path = match overrides.database_path {
            Some(path) => path,
            None => default_database_path()?,
        };
        let log_path = match overrides.log_path {
            Some(path) => path,
            None => default_log_path()?,
        };

        let api_base_url = overrides.api_base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !(api_base_url.starts_with("https://") || api_base_url.starts_with("http://")) {
            bail!("API url must start with http:// or https://: {}", api_base_url);
        }

        Ok(Self {
            database_path,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            log_path,
            view: ViewConfig {
                dark_theme: !overrides.light_theme,
                show_icons: !overrides.hide_icons,
            },
        })
    }
}
