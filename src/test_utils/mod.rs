//! Shared helpers for unit and integration tests.
//!
//! Available to the crate's own `#[cfg(test)]` modules and, through the
//! `test-utils` feature, to the integration tests under `tests/`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Global flag so logging is only initialized once per test binary.
static INIT_LOGGING: Once = Once::new();

/// Initialize tracing for tests, honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs a subscriber.
/// With no `RUST_LOG` set, tests stay quiet.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// A temporary project tree for resolver tests.
///
/// Files are created with parent directories on demand; the tree is removed
/// when the fixture drops.
///
/// # Examples
///
/// ```rust
/// use resolve_imports::test_utils::ProjectFixture;
///
/// let fixture = ProjectFixture::new();
/// let entry = fixture.write("src/a.mdx", "# Post\n");
/// assert!(entry.is_file());
/// ```
pub struct ProjectFixture {
    dir: TempDir,
}

impl ProjectFixture {
    /// Create an empty project tree in a fresh temp directory.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory cannot be created; tests cannot proceed
    /// without one.
    #[must_use]
    pub fn new() -> Self {
        init_test_logging();
        Self {
            dir: TempDir::new().expect("failed to create temp project dir"),
        }
    }

    /// The project root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file at a root-relative path, creating parent directories.
    ///
    /// Returns the absolute path of the written file.
    ///
    /// # Panics
    ///
    /// Panics on I/O failure; fixtures must be fully constructed before a
    /// test runs.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create fixture dirs");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}
