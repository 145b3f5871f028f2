use std::sync::Once;

use crate::core::Entry;

static LOGGING_INIT: Once = Once::new();

/// Initializes the tracing subscriber for tests.
///
/// This function is wrapped in a `Once` block to ensure that the global
/// subscriber is set exactly one time, even when tests are run in parallel.
pub fn setup_test_logging() {
    LOGGING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok(); // Ignore the error if it's already set by another crate.
    });
}

/// Builds an entry sequence from `(name, depth, is_directory, size)` tuples.
pub fn entries(spec: &[(&str, usize, bool, u64)]) -> Vec<Entry> {
    spec.iter()
        .map(|&(name, depth, is_directory, size)| Entry {
            name: name.to_string(),
            depth,
            is_directory,
            size,
        })
        .collect()
}
