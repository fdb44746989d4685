pub mod config;
pub mod filter;
pub mod task;
pub mod task_list;

pub use config::{Config, LoggingConfig, StorageBackend, StorageConfig};
pub use filter::{FilterState, PriorityFilter, StatusFilter};
pub use task::{NewTask, Task, TaskPriority, TaskUpdate};
pub use task_list::TaskList;
