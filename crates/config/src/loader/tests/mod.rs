//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test base document selection and parsing.
//! - Test environment overlay precedence and type handling.
//! - Test once-only publishing through `ConfigCell`.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.
//! - No test here touches the process-wide snapshot; see `tests/global_snapshot_test.rs`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Writes `content` to `<dir>/<name>` and returns the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// A document setting every unconditional field to a non-default value.
pub const CUSTOM_DOCUMENT: &str = r#"
core:
  mode: debug
  work_pool_size: 1000
prometheus:
  port: 9100
log:
  level: info
endpoints:
  http:
    address: "0.0.0.0:8000"
    user: admin
    pass: s3cret
"#;
