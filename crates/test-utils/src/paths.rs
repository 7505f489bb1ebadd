//! Path utilities for locating fixture files.
//!
//! Full-size O1280 fixtures are ~26 MB each and are not committed; tests that
//! need them look them up here and skip when they are absent.

use std::path::PathBuf;

/// Returns the workspace root directory.
///
/// Walks up from the test-utils manifest directory (`crates/test-utils`).
pub fn workspace_root() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(manifest_dir))
}

/// Default output directory of `fixture-gen`: `tests/fixtures/`.
pub fn fixtures_dir() -> PathBuf {
    workspace_root().join("tests").join("fixtures")
}

/// Searches for a fixture file.
///
/// Checks, in order:
/// 1. Environment variable `FIXTURES_DIR` (if set)
/// 2. `tests/fixtures/` under the workspace root
/// 3. `/tmp/`
pub fn find_test_file(name: &str) -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(dir) = std::env::var("FIXTURES_DIR") {
        candidates.push(PathBuf::from(dir).join(name));
    }

    candidates.extend([fixtures_dir().join(name), PathBuf::from("/tmp").join(name)]);

    candidates.into_iter().find(|path| path.exists())
}

/// Creates a temporary directory for test output, removed on drop.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary test directory")
}
