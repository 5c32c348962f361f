mod schema;

pub use schema::{Config, DEFAULT_INTENT_NAME, DEFAULT_TIME_ZONE};

use anyhow::{Context, Result};
use chrono_tz::Tz;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/viqc-bot/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("viqc-bot"))
}

/// Get the default config file path (~/.config/viqc-bot/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// An explicit `path` must exist. Without one, the default path is used if
/// present and built-in defaults otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - An explicit config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            read_config(&path)
        }
        None => match get_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            path.display()
        )
    })?;

    Ok(config)
}

/// Validate a loaded config and return the parsed display zone.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<Tz, Vec<String>> {
    let mut errors = Vec::new();

    let zone = match crate::logging::parse_time_zone(&config.time_zone) {
        Ok(zone) => Some(zone),
        Err(e) => {
            errors.push(format!("time_zone: {}", e));
            None
        }
    };

    if config.intent_name.trim().is_empty() {
        errors.push("intent_name: must not be empty".to_string());
    }

    match zone {
        Some(zone) if errors.is_empty() => Ok(zone),
        _ => Err(errors),
    }
}
