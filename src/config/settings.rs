use anyhow::Result;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use super::TreeSettings;

const APP_NAME: &str = "FileTreeGenerator";
const SETTINGS_FILE: &str = "settings.json";

/// Returns the platform-specific configuration directory for the application.
pub fn get_config_directory() -> Option<PathBuf> {
    ProjectDirs::from("com", "filetreegenerator", APP_NAME)
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}

/// Returns the full path to the settings file.
pub fn get_settings_file_path() -> Option<PathBuf> {
    get_config_directory().map(|dir| dir.join(SETTINGS_FILE))
}

fn resolve_path(path_override: Option<&Path>) -> Result<PathBuf> {
    match path_override {
        Some(path) => Ok(path.to_path_buf()),
        None => get_settings_file_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory")),
    }
}

/// Loads the tree settings from the settings file.
/// If the file doesn't exist, it creates a default one.
/// If the file is corrupted or cannot be parsed, it logs a warning
/// and falls back to the default settings. Missing fields take their
/// default values.
pub fn load_settings(path_override: Option<&Path>) -> Result<TreeSettings> {
    let settings_path = resolve_path(path_override)?;

    if !settings_path.exists() {
        tracing::info!(
            "Settings file not found, creating default settings at {:?}",
            settings_path
        );
        let defaults = TreeSettings::default();
        save_settings(&defaults, Some(&settings_path))?;
        return Ok(defaults);
    }

    let content = fs::read_to_string(&settings_path)?;

    match serde_json::from_str::<TreeSettings>(&content) {
        Ok(settings) => {
            tracing::info!("Loaded settings from {:?}", settings_path);
            Ok(settings)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse settings file at {:?}: {}. Falling back to default settings.",
                settings_path,
                e
            );
            Ok(TreeSettings::default())
        }
    }
}

/// Saves the provided settings, creating the parent directory if needed.
pub fn save_settings(settings: &TreeSettings, path_override: Option<&Path>) -> Result<()> {
    let settings_path = resolve_path(path_override)?;

    if let Some(dir) = settings_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
            tracing::info!("Created config directory: {:?}", dir);
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(&settings_path, json)?;
    tracing::info!("Saved settings to {:?}", settings_path);

    Ok(())
}

/// Exports the current settings to a user-specified JSON file.
pub fn export_settings(settings: &TreeSettings, export_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(export_path, json)?;
    tracing::info!("Exported settings to {:?}", export_path);
    Ok(())
}

/// Imports settings from a user-specified JSON file.
///
/// Unlike [`load_settings`], a file that cannot be parsed is an error: the
/// user asked for this specific file.
pub fn import_settings(import_path: &Path) -> Result<TreeSettings> {
    let content = fs::read_to_string(import_path)?;
    let settings = serde_json::from_str::<TreeSettings>(&content).map_err(|e| {
        anyhow::anyhow!("Could not import settings from {:?}: {}", import_path, e)
    })?;
    tracing::info!("Imported settings from {:?}", import_path);
    Ok(settings)
}

// Platform-specific configuration paths for reference:
// macOS:   ~/Library/Application Support/com.filetreegenerator.FileTreeGenerator/
// Linux:   ~/.config/filetreegenerator/
// Windows: %APPDATA%/filetreegenerator/FileTreeGenerator/config/
