//! Domain errors for taskdeck.

use thiserror::Error;

/// Domain-level errors that can occur in taskdeck.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Ambiguous id prefix '{prefix}': matches {} tasks", .matches.len())]
    AmbiguousId { prefix: String, matches: Vec<String> },

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
