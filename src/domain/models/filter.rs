//! Filter criteria applied to the task list before display.

use serde::{Deserialize, Deserializer, Serialize};

use super::task::TaskPriority;

/// Priority selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(Self::All),
            other => TaskPriority::from_str(other).map(Self::from),
        }
    }

    /// The single priority this selector admits, `None` for `all`.
    pub fn priority(&self) -> Option<TaskPriority> {
        match self {
            Self::All => None,
            Self::Low => Some(TaskPriority::Low),
            Self::Medium => Some(TaskPriority::Medium),
            Self::High => Some(TaskPriority::High),
        }
    }
}

impl From<TaskPriority> for PriorityFilter {
    fn from(priority: TaskPriority) -> Self {
        match priority {
            TaskPriority::Low => Self::Low,
            TaskPriority::Medium => Self::Medium,
            TaskPriority::High => Self::High,
        }
    }
}

/// Completion-status selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" | "complete" | "done" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// The set of active filter criteria. Every field at its default means
/// "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// Case-insensitive substring matched against title or description
    pub search: String,
    pub priority: PriorityFilter,
    pub status: StatusFilter,
    /// Inclusive lower due-date bound (`YYYY-MM-DD`); `""` means unset
    #[serde(
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date_from: Option<String>,
    /// Inclusive upper due-date bound (`YYYY-MM-DD`); `""` means unset
    #[serde(
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date_to: Option<String>,
}

impl FilterState {
    /// True when no criterion is set.
    pub fn is_default(&self) -> bool {
        self.search.is_empty()
            && self.priority == PriorityFilter::All
            && self.status == StatusFilter::All
            && self.due_from().is_none()
            && self.due_to().is_none()
    }

    /// Lower due-date bound, if one is set.
    pub fn due_from(&self) -> Option<&str> {
        self.due_date_from.as_deref().filter(|d| !d.is_empty())
    }

    /// Upper due-date bound, if one is set.
    pub fn due_to(&self) -> Option<&str> {
        self.due_date_to.as_deref().filter(|d| !d.is_empty())
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the priority selector.
    pub fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    /// Set the status selector.
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Set the inclusive due-date range; either bound may be open.
    pub fn with_due_range(mut self, from: Option<String>, to: Option<String>) -> Self {
        self.due_date_from = from.filter(|d| !d.is_empty());
        self.due_date_to = to.filter(|d| !d.is_empty());
        self
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|d| !d.is_empty()))
}
