//! Ordered, value-semantics task list.
//!
//! Every mutation returns a new list and leaves the receiver untouched.
//! Operations on an id that is not in the list return an unchanged copy.

use serde::{Deserialize, Serialize};

use super::task::{NewTask, Task, TaskUpdate};

/// Ordered list of tasks in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a new task with a fresh id and timestamps.
    pub fn with_added(&self, input: NewTask, now: &str) -> (Self, Task) {
        let task = Task::from_new(input, now);
        let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
        tasks.extend(self.tasks.iter().cloned());
        tasks.push(task.clone());
        (Self { tasks }, task)
    }

    /// Rewrite the matching task's fields.
    pub fn with_updated(&self, id: &str, update: &TaskUpdate, now: &str) -> Self {
        self.map_matching(id, |t| t.updated(update, now))
    }

    /// Flip the matching task's completion flag.
    pub fn with_toggled(&self, id: &str, now: &str) -> Self {
        self.map_matching(id, |t| t.toggled(now))
    }

    /// Remove the task with `id`.
    pub fn without(&self, id: &str) -> Self {
        Self {
            tasks: self.tasks.iter().filter(|t| t.id != id).cloned().collect(),
        }
    }

    fn map_matching(&self, id: &str, f: impl Fn(&Task) -> Task) -> Self {
        Self {
            tasks: self
                .tasks
                .iter()
                .map(|t| if t.id == id { f(t) } else { t.clone() })
                .collect(),
        }
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
