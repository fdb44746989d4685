//! Task service: the in-memory task list backed by a key-value store.
//!
//! Opening the service loads the stored list without writing anything back.
//! Every mutation after that builds a new list, replaces the in-memory one,
//! and saves the whole list. Save failures are swallowed by
//! [`TaskPersistence`], so mutations only fail on bad input or unknown ids.

use std::sync::Arc;

use tracing::info;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::task::{normalize_description, normalize_due_date, normalize_title, now_timestamp};
use crate::domain::models::{FilterState, NewTask, Task, TaskList, TaskUpdate};
use crate::domain::ports::KeyValueStore;
use crate::services::task_filter::filter_tasks;
use crate::services::task_persistence::{SaveOutcome, TaskPersistence};

pub struct TaskService<S: KeyValueStore + ?Sized> {
    persistence: TaskPersistence<S>,
    tasks: TaskList,
    last_save: Option<SaveOutcome>,
}

impl<S: KeyValueStore + ?Sized> TaskService<S> {
    /// Load the list stored under `key`.
    pub async fn open(store: Arc<S>, key: impl Into<String>) -> Self {
        let persistence = TaskPersistence::new(store, key);
        let tasks = persistence.load().await;
        Self {
            persistence,
            tasks,
            last_save: None,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.find(id)
    }

    /// Outcome of the most recent save, `None` before the first mutation.
    pub fn last_save(&self) -> Option<SaveOutcome> {
        self.last_save
    }

    /// Filtered and sorted view of the list.
    pub fn visible(&self, filters: &FilterState) -> Vec<Task> {
        filter_tasks(self.tasks.as_slice(), filters)
    }

    /// Resolve a full id or a unique id prefix.
    pub fn resolve_id(&self, prefix: &str) -> DomainResult<String> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(DomainError::ValidationFailed(
                "Task id must not be empty".to_string(),
            ));
        }
        if self.tasks.contains(prefix) {
            return Ok(prefix.to_string());
        }

        let matches: Vec<String> = self
            .tasks
            .iter()
            .filter(|t| t.id.starts_with(prefix))
            .map(|t| t.id.clone())
            .collect();

        match matches.len() {
            0 => Err(DomainError::TaskNotFound(prefix.to_string())),
            1 => Ok(matches.into_iter().next().unwrap_or_default()),
            _ => Err(DomainError::AmbiguousId {
                prefix: prefix.to_string(),
                matches,
            }),
        }
    }

    /// Append a new task.
    pub async fn add(&mut self, input: NewTask) -> Task {
        let (next, task) = self.tasks.with_added(input, &now_timestamp());
        info!(task_id = %task.id, title = %task.title, "task added");
        self.commit(next).await;
        task
    }

    /// Apply a partial update to an existing task.
    pub async fn update(&mut self, id: &str, update: TaskUpdate) -> DomainResult<Task> {
        self.ensure_exists(id)?;
        let update = normalize_update(update)?;
        let next = self.tasks.with_updated(id, &update, &now_timestamp());
        info!(task_id = %id, "task updated");
        self.commit(next).await;
        self.current(id)
    }

    /// Flip a task between complete and incomplete.
    pub async fn toggle_complete(&mut self, id: &str) -> DomainResult<Task> {
        self.ensure_exists(id)?;
        let next = self.tasks.with_toggled(id, &now_timestamp());
        self.commit(next).await;
        let task = self.current(id)?;
        info!(task_id = %id, completed = task.completed, "task toggled");
        Ok(task)
    }

    /// Remove a task, returning it.
    pub async fn delete(&mut self, id: &str) -> DomainResult<Task> {
        let removed = self.current(id)?;
        let next = self.tasks.without(id);
        info!(task_id = %id, "task deleted");
        self.commit(next).await;
        Ok(removed)
    }

    async fn commit(&mut self, next: TaskList) {
        self.tasks = next;
        self.last_save = Some(self.persistence.save(&self.tasks).await);
    }

    fn ensure_exists(&self, id: &str) -> DomainResult<()> {
        if self.tasks.contains(id) {
            Ok(())
        } else {
            Err(DomainError::TaskNotFound(id.to_string()))
        }
    }

    fn current(&self, id: &str) -> DomainResult<Task> {
        self.tasks
            .find(id)
            .cloned()
            .ok_or_else(|| DomainError::TaskNotFound(id.to_string()))
    }
}

/// Apply the same input rules as task creation to an update.
fn normalize_update(update: TaskUpdate) -> DomainResult<TaskUpdate> {
    Ok(TaskUpdate {
        title: update.title.as_deref().map(normalize_title).transpose()?,
        description: update
            .description
            .map(|d| d.as_deref().and_then(normalize_description)),
        priority: update.priority,
        due_date: update
            .due_date
            .map(|d| d.as_deref().map(normalize_due_date).transpose())
            .transpose()?,
        completed: update.completed,
    })
}
