//! Writes the plain-text tree to disk.

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use super::state::SessionState;

/// File name for a downloaded tree, keyed by the export time in milliseconds.
pub fn download_file_name(timestamp: DateTime<Utc>) -> String {
    format!("file_tree_{}.txt", timestamp.timestamp_millis())
}

/// The user's download directory, or the current directory if there is none.
pub fn default_export_directory() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Writes the plain-text tree of `state` into `directory` and returns the
/// path of the new file.
pub fn export_tree(state: &SessionState, directory: &Path) -> Result<PathBuf> {
    let text = state
        .clipboard_text()?
        .ok_or_else(|| anyhow::anyhow!("Please scan a directory first"))?;

    if !directory.exists() {
        fs::create_dir_all(directory)?;
    }

    let path = directory.join(download_file_name(Utc::now()));
    fs::write(&path, text)?;
    tracing::info!("Exported tree to {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TreeSettings;
    use crate::scan::ScanResult;
    use crate::utils::test_helpers::entries;
    use chrono::TimeZone;

    #[test]
    fn test_download_file_name() {
        let ts = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(download_file_name(ts), "file_tree_1700000000123.txt");
    }

    #[test]
    fn test_export_writes_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let state = SessionState::new(TreeSettings::default()).with_scan(ScanResult {
            root_path: "/x/y".to_string(),
            entries: entries(&[("d", 1, false, 50)]),
        });

        let path = export_tree(&state, dir.path()).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("file_tree_") && name.ends_with(".txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "y/\n└── d (50 B)\n");
    }

    #[test]
    fn test_export_without_scan_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(export_tree(&SessionState::default(), dir.path()).is_err());
    }
}
