//! Key-value store adapters.

pub mod file_store;
pub mod memory_store;
pub mod sqlite;

pub use file_store::FileKeyValueStore;
pub use memory_store::InMemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;
