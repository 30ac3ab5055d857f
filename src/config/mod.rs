//! Configuration module for lead-relay
//!
//! Handles loading and validating settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;

/// Environment variable pointing at an explicit settings file
pub const SETTINGS_PATH_VAR: &str = "LEAD_RELAY_SETTINGS_PATH";

/// Settings together with where they came from
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: Settings,
    /// YAML file the settings were read from, if any
    pub settings_file: Option<PathBuf>,
    /// `.env` file merged into the environment, if any
    pub env_file: Option<PathBuf>,
}

/// Load settings from file or use defaults, then overlay the environment.
///
/// A `.env` file in the working directory is read first, so its values take
/// part in the environment overlay. Nothing is logged here since this runs
/// before the subscriber exists.
pub fn load() -> Result<LoadedSettings> {
    let env_file = dotenvy::dotenv().ok();

    let settings_file = find_settings_file();
    let mut settings = match settings_file {
        Some(ref path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    settings.merge_env();
    settings.validate()?;

    Ok(LoadedSettings {
        settings,
        settings_file,
        env_file,
    })
}

fn find_settings_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(SETTINGS_PATH_VAR) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("lead-relay/settings.yml"));
    }

    paths.into_iter().find(|p| p.exists())
}
