//! Status, priority, and due-date styling for CLI output.

use console::{style, StyledObject};

use crate::domain::models::TaskPriority;

/// Styled status word: completed tasks green, open tasks blue.
pub fn colorize_status(completed: bool) -> StyledObject<&'static str> {
    if completed {
        style("completed").green().bold()
    } else {
        style("active").blue()
    }
}

/// Styled priority: High = red bold, Medium = yellow, Low = dim.
pub fn colorize_priority(priority: TaskPriority) -> StyledObject<&'static str> {
    match priority {
        TaskPriority::High => style(priority.as_str()).red().bold(),
        TaskPriority::Medium => style(priority.as_str()).yellow(),
        TaskPriority::Low => style(priority.as_str()).dim(),
    }
}

/// Styled due date. Overdue dates are red.
pub fn colorize_due(text: &str, overdue: bool) -> StyledObject<&str> {
    if overdue {
        style(text).red().bold()
    } else {
        style(text)
    }
}

/// Styled label for detail views (bold + dimmed colon).
pub fn label(name: &str) -> String {
    format!("{}{}", style(name).bold(), style(":").dim())
}

/// Section header with underline.
pub fn section_header(title: &str) -> String {
    format!("\n{}", style(title).bold().underlined())
}
