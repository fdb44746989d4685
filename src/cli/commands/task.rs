//! Task CLI commands.

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Args;
use serde::Serialize;

use crate::cli::commands::open_service;
use crate::cli::display::{
    action_failure, action_success, colorize_due, colorize_priority, colorize_status, count_label,
    format_due_date, format_due_date_opt, format_timestamp, list_table, output, render_list,
    short_id, truncate_ellipsis, CommandOutput, DetailView,
};
use crate::domain::models::task::parse_due_date;
use crate::domain::models::{
    Config, FilterState, NewTask, PriorityFilter, StatusFilter, Task, TaskPriority, TaskUpdate,
};
use crate::services::{active_filter_count, SaveOutcome};

const TITLE_WIDTH: usize = 48;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Task title
    pub title: String,

    /// Task description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Priority (low, medium, high)
    #[arg(short, long, default_value = "medium")]
    pub priority: String,

    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Task ID or unique prefix
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(short, long, conflicts_with = "clear_description")]
    pub description: Option<String>,

    /// Remove the description
    #[arg(long)]
    pub clear_description: bool,

    /// New priority (low, medium, high)
    #[arg(short, long)]
    pub priority: Option<String>,

    /// New due date (YYYY-MM-DD)
    #[arg(long, conflicts_with = "clear_due")]
    pub due: Option<String>,

    /// Remove the due date
    #[arg(long)]
    pub clear_due: bool,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Task ID or unique prefix
    pub id: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive text to find in title or description
    #[arg(short, long)]
    pub search: Option<String>,

    /// Priority filter (all, low, medium, high)
    #[arg(short, long, default_value = "all")]
    pub priority: String,

    /// Status filter (all, active, completed)
    #[arg(long, default_value = "all")]
    pub status: String,

    /// Only tasks due on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Only tasks due on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

impl ListArgs {
    /// Build the filter state, rejecting unknown values and inverted ranges.
    pub fn to_filters(&self) -> Result<FilterState> {
        let priority = PriorityFilter::from_str(&self.priority).with_context(|| {
            format!(
                "Invalid priority filter '{}': expected all, low, medium, or high",
                self.priority
            )
        })?;
        let status = StatusFilter::from_str(&self.status).with_context(|| {
            format!(
                "Invalid status filter '{}': expected all, active, or completed",
                self.status
            )
        })?;

        let from = non_blank(self.from.as_deref());
        let to = non_blank(self.to.as_deref());
        let from_date = from.map(parse_due_date).transpose()?;
        let to_date = to.map(parse_due_date).transpose()?;
        if let (Some(from_date), Some(to_date)) = (from_date, to_date) {
            if from_date > to_date {
                bail!("--from ({from_date}) must not be later than --to ({to_date})");
            }
        }

        Ok(FilterState::default()
            .with_search(self.search.clone().unwrap_or_default())
            .with_priority(priority)
            .with_status(status)
            .with_due_range(
                from_date.map(|d| d.to_string()),
                to_date.map(|d| d.to_string()),
            ))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_priority(value: &str) -> Result<TaskPriority> {
    TaskPriority::from_str(value).with_context(|| {
        format!("Invalid priority '{value}': expected low, medium, or high")
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOutput {
    #[serde(flatten)]
    pub task: Task,
    pub overdue: bool,
}

impl From<&Task> for TaskOutput {
    fn from(task: &Task) -> Self {
        Self {
            task: task.clone(),
            overdue: task.is_overdue(Local::now().date_naive()),
        }
    }
}

impl TaskOutput {
    fn due_cell(&self) -> String {
        let text = format_due_date_opt(self.task.due_date.as_deref());
        colorize_due(&text, self.overdue).to_string()
    }
}

/// Mutation reported by [`TaskActionOutput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskAction {
    Added,
    Updated,
    Toggled,
    Deleted,
}

#[derive(Debug, Serialize)]
pub struct TaskActionOutput {
    pub action: TaskAction,
    pub task: TaskOutput,
    pub saved: bool,
}

impl TaskActionOutput {
    fn new(action: TaskAction, task: &Task, outcome: Option<SaveOutcome>) -> Self {
        Self {
            action,
            task: TaskOutput::from(task),
            saved: outcome.is_some_and(|o| o.is_saved()),
        }
    }
}

impl CommandOutput for TaskActionOutput {
    fn to_human(&self) -> String {
        let task = &self.task.task;
        let verb = match self.action {
            TaskAction::Toggled if task.completed => "Completed",
            TaskAction::Toggled => "Reopened",
            TaskAction::Added => "Added",
            TaskAction::Updated => "Updated",
            TaskAction::Deleted => "Deleted",
        };
        let mut lines = vec![action_success(&format!(
            "{verb} task {}: {}",
            short_id(&task.id),
            task.title
        ))];
        if !self.saved {
            lines.push(action_failure(
                "Changes could not be saved and will be lost when taskdeck exits",
            ));
        }
        lines.join("\n")
    }
}

#[derive(Debug, Serialize)]
pub struct TaskDetailOutput {
    pub task: TaskOutput,
}

impl CommandOutput for TaskDetailOutput {
    fn to_human(&self) -> String {
        let task = &self.task.task;
        let priority = colorize_priority(task.priority).to_string();
        let status = colorize_status(task.completed).to_string();
        let due = task.due_date.as_deref().map(|d| {
            let mut text = colorize_due(&format_due_date(d), self.task.overdue).to_string();
            if self.task.overdue {
                text.push_str(" (overdue)");
            }
            text
        });

        DetailView::new(&task.title)
            .field("ID", &task.id)
            .field("Status", &status)
            .field("Priority", &priority)
            .field_opt("Due", due.as_deref())
            .field_opt("Description", task.description.as_deref())
            .section("Timestamps")
            .field("Created", &format_timestamp(&task.created_at))
            .field("Updated", &format_timestamp(&task.updated_at))
            .render()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListOutput {
    pub tasks: Vec<TaskOutput>,
    pub total: usize,
    pub stored_total: usize,
    pub active_filters: usize,
    pub filters: FilterState,
}

impl CommandOutput for TaskListOutput {
    fn to_human(&self) -> String {
        if self.stored_total == 0 {
            return "Nothing here yet. Add your first task to get started.".to_string();
        }

        let mut table = list_table(&["id", "title", "priority", "status", "due"]);
        for task in &self.tasks {
            table.add_row(vec![
                short_id(&task.task.id).to_string(),
                truncate_ellipsis(&task.task.title, TITLE_WIDTH),
                colorize_priority(task.task.priority).to_string(),
                colorize_status(task.task.completed).to_string(),
                task.due_cell(),
            ]);
        }

        let filters_note = match self.active_filters {
            0 => String::new(),
            n => format!(" ({} active)", count_label(n, "filter", "filters")),
        };
        let empty = format!("No tasks match the current filters.{filters_note}");
        let mut rendered = render_list("task", &table, self.total, &empty);
        if self.total > 0 && self.active_filters > 0 {
            rendered.push_str(&format!(
                "\nShowing {} of {}{filters_note}",
                self.total,
                count_label(self.stored_total, "task", "tasks")
            ));
        }
        rendered
    }
}

#[derive(Debug, Serialize)]
pub struct TaskCountOutput {
    pub count: usize,
}

impl CommandOutput for TaskCountOutput {
    fn to_human(&self) -> String {
        match self.count {
            0 => "No tasks yet".to_string(),
            n => count_label(n, "task", "tasks"),
        }
    }
}

pub async fn execute_add(args: AddArgs, config: &Config, json_mode: bool) -> Result<()> {
    let mut input = NewTask::new(&args.title)?.with_priority(parse_priority(&args.priority)?);
    if let Some(description) = &args.description {
        input = input.with_description(description);
    }
    if let Some(due) = non_blank(args.due.as_deref()) {
        input = input.with_due_date(due)?;
    }

    let mut service = open_service(config).await?;
    let task = service.add(input).await;
    output(
        &TaskActionOutput::new(TaskAction::Added, &task, service.last_save()),
        json_mode,
    );
    Ok(())
}

pub async fn execute_edit(args: EditArgs, config: &Config, json_mode: bool) -> Result<()> {
    let update = TaskUpdate {
        title: args.title,
        description: if args.clear_description {
            Some(None)
        } else {
            args.description.map(Some)
        },
        priority: args.priority.as_deref().map(parse_priority).transpose()?,
        due_date: if args.clear_due {
            Some(None)
        } else {
            args.due.map(Some)
        },
        completed: None,
    };
    if update.is_empty() {
        bail!(
            "At least one change must be specified (--title, --description, --clear-description, --priority, --due, or --clear-due)"
        );
    }

    let mut service = open_service(config).await?;
    let id = service.resolve_id(&args.id)?;
    let task = service.update(&id, update).await?;
    output(
        &TaskActionOutput::new(TaskAction::Updated, &task, service.last_save()),
        json_mode,
    );
    Ok(())
}

pub async fn execute_delete(args: IdArgs, config: &Config, json_mode: bool) -> Result<()> {
    let mut service = open_service(config).await?;
    let id = service.resolve_id(&args.id)?;
    let task = service.delete(&id).await?;
    output(
        &TaskActionOutput::new(TaskAction::Deleted, &task, service.last_save()),
        json_mode,
    );
    Ok(())
}

pub async fn execute_toggle(args: IdArgs, config: &Config, json_mode: bool) -> Result<()> {
    let mut service = open_service(config).await?;
    let id = service.resolve_id(&args.id)?;
    let task = service.toggle_complete(&id).await?;
    output(
        &TaskActionOutput::new(TaskAction::Toggled, &task, service.last_save()),
        json_mode,
    );
    Ok(())
}

pub async fn execute_show(args: IdArgs, config: &Config, json_mode: bool) -> Result<()> {
    let service = open_service(config).await?;
    let id = service.resolve_id(&args.id)?;
    let task = service
        .get(&id)
        .with_context(|| format!("Task {id} not found. Use 'taskdeck list' to see available tasks."))?;
    output(
        &TaskDetailOutput {
            task: TaskOutput::from(task),
        },
        json_mode,
    );
    Ok(())
}

pub async fn execute_list(args: ListArgs, config: &Config, json_mode: bool) -> Result<()> {
    let filters = args.to_filters()?;
    let service = open_service(config).await?;
    let tasks: Vec<TaskOutput> = service.visible(&filters).iter().map(TaskOutput::from).collect();

    output(
        &TaskListOutput {
            total: tasks.len(),
            tasks,
            stored_total: service.tasks().len(),
            active_filters: active_filter_count(&filters),
            filters,
        },
        json_mode,
    );
    Ok(())
}

pub async fn execute_count(config: &Config, json_mode: bool) -> Result<()> {
    let service = open_service(config).await?;
    output(
        &TaskCountOutput {
            count: service.tasks().len(),
        },
        json_mode,
    );
    Ok(())
}
