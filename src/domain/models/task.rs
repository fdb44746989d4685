//! Task domain model.
//!
//! A task is a single to-do item. The serialized shape (camelCase keys,
//! string timestamps, `YYYY-MM-DD` due dates) is the persisted wire format.

use chrono::{NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};

/// Calendar date format used for due dates and due-date filter bounds.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Priority level for tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Sort rank: lower ranks are listed first (high = 0, low = 2).
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier (UUID v4 string)
    pub id: String,
    /// Short title, never empty for tasks created through the service
    pub title: String,
    /// Optional free-form description
    #[serde(
        default,
        deserialize_with = "string_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    pub priority: TaskPriority,
    /// Due date as `YYYY-MM-DD`
    #[serde(
        default,
        deserialize_with = "string_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<String>,
    pub completed: bool,
    /// ISO-8601 creation timestamp
    pub created_at: String,
    /// ISO-8601 timestamp of the last update or toggle
    pub updated_at: String,
}

impl Task {
    /// Build a fresh, incomplete task from validated input.
    pub fn from_new(input: NewTask, now: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            description: input.description,
            priority: input.priority,
            due_date: input.due_date,
            completed: false,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    /// Return a copy with `update` applied and `updated_at` refreshed.
    pub fn updated(&self, update: &TaskUpdate, now: &str) -> Self {
        let mut task = self.clone();
        if let Some(title) = &update.title {
            task.title.clone_from(title);
        }
        if let Some(description) = &update.description {
            task.description.clone_from(description);
        }
        if let Some(priority) = update.priority {
            task.priority = priority;
        }
        if let Some(due_date) = &update.due_date {
            task.due_date.clone_from(due_date);
        }
        if let Some(completed) = update.completed {
            task.completed = completed;
        }
        task.updated_at = now.to_string();
        task
    }

    /// Return a copy with the completion flag flipped.
    pub fn toggled(&self, now: &str) -> Self {
        Self {
            completed: !self.completed,
            updated_at: now.to_string(),
            ..self.clone()
        }
    }

    /// An incomplete task whose due date lies before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        if self.completed {
            return false;
        }
        let today = today.format(DUE_DATE_FORMAT).to_string();
        self.due_date
            .as_deref()
            .is_some_and(|due| due < today.as_str())
    }
}

/// Validated input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub due_date: Option<String>,
}

impl NewTask {
    /// Create input with a trimmed title; fails when the title is blank.
    pub fn new(title: impl AsRef<str>) -> DomainResult<Self> {
        Ok(Self {
            title: normalize_title(title.as_ref())?,
            ..Self::default()
        })
    }

    /// Set the description. Blank descriptions are dropped.
    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = normalize_description(description.as_ref());
        self
    }

    /// Set priority.
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the due date; fails unless it is a `YYYY-MM-DD` calendar date.
    pub fn with_due_date(mut self, due_date: impl AsRef<str>) -> DomainResult<Self> {
        self.due_date = Some(normalize_due_date(due_date.as_ref())?);
        Ok(self)
    }
}

/// Partial update of a task. `None` leaves a field untouched; for the
/// optional fields, `Some(None)` clears the value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<Option<String>>,
    pub completed: Option<bool>,
}

impl TaskUpdate {
    /// Whether applying this update would change nothing but `updated_at`.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.completed.is_none()
    }
}

/// Trim a title, rejecting blank ones.
pub fn normalize_title(title: &str) -> DomainResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DomainError::ValidationFailed(
            "Task title cannot be empty".to_string(),
        ));
    }
    Ok(title.to_string())
}

/// Trim a description; blank means absent.
pub fn normalize_description(description: &str) -> Option<String> {
    let description = description.trim();
    (!description.is_empty()).then(|| description.to_string())
}

/// Parse a `YYYY-MM-DD` date and return it in canonical form.
pub fn normalize_due_date(date: &str) -> DomainResult<String> {
    parse_due_date(date).map(|d| d.format(DUE_DATE_FORMAT).to_string())
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_due_date(date: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DUE_DATE_FORMAT).map_err(|e| {
        DomainError::ValidationFailed(format!(
            "Invalid due date '{date}': {e} (expected YYYY-MM-DD)"
        ))
    })
}

/// Current time as an ISO-8601 UTC timestamp with millisecond precision.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Optional text fields keep only non-empty string values; anything else,
/// including `""`, reads as absent.
fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}
