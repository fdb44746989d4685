//! Loading and saving the task list through a [`KeyValueStore`].
//!
//! Loading is forgiving: missing, empty, or malformed content yields an
//! empty list, and individual records that fail structural validation are
//! dropped. Saving never reports failure to the caller; the in-memory list
//! stays authoritative for the session.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::models::{Task, TaskList};
use crate::domain::ports::KeyValueStore;

/// Outcome of a save, for logging and display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The write failed and was swallowed
    Failed,
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Reads and writes the full task list under a single key.
pub struct TaskPersistence<S: KeyValueStore + ?Sized> {
    store: Arc<S>,
    key: String,
}

impl<S: KeyValueStore + ?Sized> TaskPersistence<S> {
    pub fn new(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Load the stored list. Never fails.
    pub async fn load(&self) -> TaskList {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no stored tasks");
                return TaskList::new();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read stored tasks");
                return TaskList::new();
            }
        };

        let tasks = parse_stored_tasks(&raw);
        debug!(key = %self.key, count = tasks.len(), "loaded tasks");
        tasks
    }

    /// Write the full list back. Failures are logged and swallowed.
    pub async fn save(&self, tasks: &TaskList) -> SaveOutcome {
        let json = match serde_json::to_string(tasks) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to serialize tasks");
                return SaveOutcome::Failed;
            }
        };

        match self.store.set(&self.key, &json).await {
            Ok(()) => {
                debug!(key = %self.key, count = tasks.len(), bytes = json.len(), "saved tasks");
                SaveOutcome::Saved
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to save tasks, keeping in-memory state");
                SaveOutcome::Failed
            }
        }
    }
}

/// Parse stored text into a task list, dropping invalid records.
pub fn parse_stored_tasks(raw: &str) -> TaskList {
    if raw.trim().is_empty() {
        return TaskList::new();
    }

    let parsed: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "stored tasks are not valid JSON, starting empty");
            return TaskList::new();
        }
    };

    let Value::Array(items) = parsed else {
        warn!("stored tasks are not a JSON array, starting empty");
        return TaskList::new();
    };

    let total = items.len();
    let tasks: Vec<Task> = items
        .into_iter()
        .filter(is_valid_task)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();

    if tasks.len() < total {
        warn!(dropped = total - tasks.len(), "dropped invalid stored task records");
    }
    TaskList::from(tasks)
}

/// Structural check of a stored record: string id, title, createdAt and
/// updatedAt, a known priority, and a boolean completed flag.
fn is_valid_task(item: &Value) -> bool {
    let Value::Object(fields) = item else {
        return false;
    };
    let is_string = |name: &str| fields.get(name).is_some_and(Value::is_string);

    is_string("id")
        && is_string("title")
        && is_string("createdAt")
        && is_string("updatedAt")
        && matches!(
            fields.get("priority").and_then(Value::as_str),
            Some("low" | "medium" | "high")
        )
        && fields.get("completed").is_some_and(Value::is_boolean)
}
