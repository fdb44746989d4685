//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

use tempfile::TempDir;

use taskdeck::{Task, TaskPriority};

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
#[allow(dead_code)]
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Build a stored task directly, bypassing the service.
#[allow(dead_code)]
pub fn make_task(
    id: &str,
    title: &str,
    priority: TaskPriority,
    due_date: Option<&str>,
    completed: bool,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        priority,
        due_date: due_date.map(str::to_string),
        completed,
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
        updated_at: "2024-01-01T00:00:00.000Z".to_string(),
    }
}
