//! Application layer: the session state and the operations the front end
//! performs on it.

pub mod export;
pub mod persistence;
pub mod state;

use crate::scan::{ScanError, ScanRequest, ScanSource};
use state::SessionState;

/// Scans the path the user entered and returns the updated session.
///
/// The request is built from the session's path input and settings. On error
/// the caller keeps its previous state untouched.
pub fn scan_directory(
    state: SessionState,
    source: &dyn ScanSource,
) -> Result<SessionState, ScanError> {
    let request = ScanRequest::from_settings(&state.path_input, &state.settings)?;
    tracing::info!(
        "Scanning {:?} (max_depth: {}, {} exclude patterns)",
        request.path,
        request.max_depth,
        request.exclude_patterns.len()
    );
    let result = source.scan(&request)?;
    Ok(state.with_scan(result))
}
