//! Saves and restores the session between runs.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use super::state::SessionState;
use crate::config::settings::{get_config_directory, load_settings};

const SESSION_FILE: &str = "session.json";

/// Returns the full path to the session file.
pub fn get_session_file_path() -> Option<PathBuf> {
    get_config_directory().map(|dir| dir.join(SESSION_FILE))
}

fn resolve_path(path_override: Option<&Path>) -> Result<PathBuf> {
    match path_override {
        Some(path) => Ok(path.to_path_buf()),
        None => get_session_file_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory")),
    }
}

/// Writes the session, scan data included, as JSON.
pub fn save_session(state: &SessionState, path_override: Option<&Path>) -> Result<()> {
    let session_path = resolve_path(path_override)?;

    if let Some(dir) = session_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }

    let json = serde_json::to_string_pretty(state)?;
    fs::write(&session_path, json)?;
    tracing::info!(
        "Saved session with {} entries to {:?}",
        state.current_files.len(),
        session_path
    );
    Ok(())
}

/// Loads the saved session.
///
/// A missing file yields a fresh session. A file that cannot be parsed is
/// logged and also yields a fresh session rather than an error.
pub fn load_session(path_override: Option<&Path>) -> Result<SessionState> {
    let session_path = resolve_path(path_override)?;

    if !session_path.exists() {
        tracing::info!("No saved session at {:?}", session_path);
        return Ok(SessionState::default());
    }

    let content = fs::read_to_string(&session_path)?;
    match serde_json::from_str::<SessionState>(&content) {
        Ok(state) => {
            tracing::info!(
                "Loaded session with {} entries from {:?}",
                state.current_files.len(),
                session_path
            );
            Ok(state)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load session from {:?}: {}. Starting fresh.",
                session_path,
                e
            );
            Ok(SessionState::default())
        }
    }
}

/// Loads the saved session for replay.
///
/// A session that holds a scan keeps the settings it was rendered with, so
/// replaying it reproduces that render. An empty session picks up the
/// current settings file instead.
pub fn restore_session(
    settings_path: Option<&Path>,
    session_path: Option<&Path>,
) -> Result<SessionState> {
    let state = load_session(session_path)?;
    if state.has_files() {
        return Ok(state);
    }
    Ok(state.with_settings(load_settings(settings_path)?))
}

/// Removes the saved session, if any.
pub fn clear_session(path_override: Option<&Path>) -> Result<()> {
    let session_path = resolve_path(path_override)?;
    if session_path.exists() {
        fs::remove_file(&session_path)?;
        tracing::info!("Removed saved session at {:?}", session_path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TreeSettings;
    use crate::scan::ScanResult;
    use crate::utils::test_helpers::{entries, setup_test_logging};

    #[test]
    fn test_replayed_session_renders_identically() {
        setup_test_logging();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let state = SessionState::new(TreeSettings::default()).with_scan(ScanResult {
            root_path: "/srv/site".to_string(),
            entries: entries(&[
                ("assets", 1, true, 0),
                ("logo.png", 2, false, 20_480),
                ("index.html", 1, false, 1_536),
            ]),
        });
        let before = state.render().unwrap();

        save_session(&state, Some(&path)).unwrap();
        let restored = load_session(Some(&path)).unwrap();

        assert_eq!(restored, state);
        assert_eq!(restored.render().unwrap(), before);
    }

    #[test]
    fn test_restore_keeps_the_settings_a_scan_was_rendered_with() {
        setup_test_logging();
        let dir = tempfile::tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        let session_path = dir.path().join("session.json");

        // The settings file still says sizes are shown.
        crate::config::settings::save_settings(&TreeSettings::default(), Some(&settings_path))
            .unwrap();
        let hidden = TreeSettings {
            show_size: false,
            ..TreeSettings::default()
        };
        let state = SessionState::new(hidden).with_scan(ScanResult {
            root_path: "/x/y".to_string(),
            entries: entries(&[("d", 1, false, 50)]),
        });
        save_session(&state, Some(&session_path)).unwrap();

        let restored = restore_session(Some(&settings_path), Some(&session_path)).unwrap();
        assert!(!restored.settings.show_size);
        assert_eq!(restored.render().unwrap().plain_text, "y/\n└── d\n");
    }

    #[test]
    fn test_restore_of_empty_session_uses_settings_file() {
        setup_test_logging();
        let dir = tempfile::tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        let session_path = dir.path().join("session.json");

        let custom = TreeSettings {
            show_size: false,
            max_depth: 2,
            ..TreeSettings::default()
        };
        crate::config::settings::save_settings(&custom, Some(&settings_path)).unwrap();

        let restored = restore_session(Some(&settings_path), Some(&session_path)).unwrap();
        assert!(!restored.has_files());
        assert_eq!(restored.settings, custom);
    }

    #[test]
    fn test_missing_or_corrupt_session_starts_fresh() {
        setup_test_logging();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        assert_eq!(load_session(Some(&path)).unwrap(), SessionState::default());

        fs::write(&path, "not json").unwrap();
        assert_eq!(load_session(Some(&path)).unwrap(), SessionState::default());

        clear_session(Some(&path)).unwrap();
        assert!(!path.exists());
    }
}
