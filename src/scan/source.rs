//! Sources that can answer a [`ScanRequest`].

use std::fs;
use std::path::{Path, PathBuf};

use super::{ScanError, ScanRequest, ScanResponse, ScanResult};

/// Anything that can produce a scan for a request.
///
/// The live scanner is a remote service; this trait is the seam that lets the
/// application and its tests work against recorded responses instead.
pub trait ScanSource {
    fn scan(&self, request: &ScanRequest) -> Result<ScanResult, ScanError>;
}

/// Replays a scan response previously saved as JSON.
///
/// The recorded response already reflects whatever depth limit and exclude
/// patterns were in force when it was captured; they are not applied again.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    response_path: PathBuf,
}

impl ReplaySource {
    pub fn new(response_path: impl Into<PathBuf>) -> Self {
        Self {
            response_path: response_path.into(),
        }
    }

    pub fn response_path(&self) -> &Path {
        &self.response_path
    }

    /// Reads and validates the recorded response.
    pub fn load(&self) -> Result<ScanResult, ScanError> {
        let content = fs::read_to_string(&self.response_path)
            .map_err(|e| ScanError::Io(e, self.response_path.clone()))?;
        let response: ScanResponse = serde_json::from_str(&content)?;
        let result = response.into_result()?;
        tracing::info!(
            "Replayed scan of {:?} from {:?} ({} entries)",
            result.root_path,
            self.response_path,
            result.file_count()
        );
        Ok(result)
    }
}

impl ScanSource for ReplaySource {
    fn scan(&self, request: &ScanRequest) -> Result<ScanResult, ScanError> {
        let result = self.load()?;
        if result.root_path != request.path {
            tracing::warn!(
                "Recorded scan is for {:?}, requested {:?}",
                result.root_path,
                request.path
            );
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TreeSettings;
    use crate::core::Entry;

    #[test]
    fn test_replay_reads_recorded_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.json");
        fs::write(
            &path,
            r#"{"success": true, "path": "/srv/data", "file_count": 1,
                "files": [{"name": "notes.md", "is_directory": false, "depth": 1, "size": 42}]}"#,
        )
        .unwrap();

        let source = ReplaySource::new(&path);
        let request = ScanRequest::from_settings("/srv/data", &TreeSettings::default()).unwrap();
        let result = source.scan(&request).unwrap();

        assert_eq!(result.root_path, "/srv/data");
        assert_eq!(result.entries, vec![Entry::file("notes.md", 1, 42)]);
    }

    #[test]
    fn test_replay_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = ReplaySource::new(dir.path().join("absent.json"));
        assert!(matches!(source.load(), Err(ScanError::Io(_, _))));
    }

    #[test]
    fn test_replay_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(ReplaySource::new(&path).load(), Err(ScanError::Json(_))));
    }
}
