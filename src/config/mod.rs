//! Configuration module for instagram-search
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a settings file
pub const SETTINGS_PATH_ENV: &str = "INSTAGRAM_SEARCH_SETTINGS_PATH";

/// Default log level when `general.debug` is off; `DEBUG` also turns on
/// verbose diagnostics
pub const LOG_LEVEL_ENV: &str = "INSTAGRAM_SEARCH_LOG_LEVEL";

/// Load settings, then overlay the environment.
///
/// An explicit `path` must exist. Without one, the first existing file
/// among [`SETTINGS_PATH_ENV`] and [`default_paths`] is used, falling
/// back to defaults. Returns the file the settings came from, if any.
///
/// Runs before logging is set up, so it does not log.
pub fn load(path: Option<&Path>) -> Result<(Settings, Option<PathBuf>)> {
    let source = resolve_path(path)?;
    let mut settings = match source {
        Some(ref path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    settings.merge_env();
    settings.validate()?;
    Ok((settings, source))
}

fn resolve_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("settings file not found: {}", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }

    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Ok(Some(path));
        }
    }

    Ok(default_paths().into_iter().find(|p| p.exists()))
}

/// Locations searched for settings.yml, in order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("instagram-search/settings.yml"));
    }
    paths
}
