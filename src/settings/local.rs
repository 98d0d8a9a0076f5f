use super::merge::{merge_settings, PartialSettings};
use super::Settings;
use crate::error::{AppError, AppResult};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Load settings from a JSON file, filling gaps from the defaults.
///
/// No path, or a path that does not exist, yields the defaults. A file that
/// exists but cannot be read or parsed is an error.
pub fn load_settings(path: Option<&Path>) -> AppResult<Settings> {
    let path = match path {
        Some(path) if path.exists() => path,
        Some(path) => {
            warn!("Config file {} not found, using defaults", path.display());
            return Ok(Settings::default());
        }
        None => return Ok(Settings::default()),
    };

    let content = fs::read_to_string(path)
        .map_err(|e| AppError::config(format!("Failed to read {}: {}", path.display(), e)))?;

    let loaded: PartialSettings = serde_json::from_str(&content)
        .map_err(|e| AppError::config(format!("Failed to parse {}: {}", path.display(), e)))?;

    debug!("Loaded settings from {}", path.display());
    Ok(merge_settings(&Settings::default(), loaded))
}

/// Write settings as pretty JSON, replacing whatever is at `path`
pub fn save_settings(settings: &Settings, path: &Path) -> AppResult<()> {
    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| AppError::config(e.to_string()))?;
    fs::write(path, content)
        .map_err(|e| AppError::config(format!("Failed to write {}: {}", path.display(), e)))?;
    Ok(())
}
