pub mod task_filter;
pub mod task_persistence;
pub mod task_service;

pub use task_filter::{active_filter_count, compare_tasks, filter_tasks};
pub use task_persistence::{parse_stored_tasks, SaveOutcome, TaskPersistence};
pub use task_service::TaskService;
