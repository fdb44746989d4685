//! Taskdeck - local task manager
//!
//! Taskdeck keeps a list of tasks in a key-value store, and shows them
//! filtered by text, priority, status, and due-date range, ordered so that
//! open, urgent, soon-due work comes first.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Task models, filter state, errors, and the
//!   key-value store port
//! - **Service Layer** (`services`): Filtering, persistence, and task mutations
//! - **Adapters** (`adapters`): File, SQLite, and in-memory stores
//! - **Infrastructure Layer** (`infrastructure`): Configuration, logging,
//!   storage selection, and project setup
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use taskdeck::adapters::InMemoryKeyValueStore;
//! use taskdeck::{FilterState, NewTask, TaskService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = Arc::new(InMemoryKeyValueStore::new());
//!     let mut service = TaskService::open(store, "task-manager-tasks").await;
//!     service.add(NewTask::new("Write report")?).await;
//!     let visible = service.visible(&FilterState::default());
//!     assert_eq!(visible.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    Config, FilterState, LoggingConfig, NewTask, PriorityFilter, StatusFilter, StorageBackend,
    StorageConfig, Task, TaskList, TaskPriority, TaskUpdate,
};
pub use domain::ports::{KeyValueStore, StorageError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    active_filter_count, compare_tasks, filter_tasks, parse_stored_tasks, SaveOutcome,
    TaskPersistence, TaskService,
};
