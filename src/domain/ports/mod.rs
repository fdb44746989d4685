//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async interfaces that infrastructure adapters must implement:
//! - KeyValueStore: string-keyed persistence for the task list
//!
//! These traits keep the domain independent of any specific storage backend.

pub mod errors;
pub mod key_value_store;

pub use errors::StorageError;
pub use key_value_store::{check_quota, validate_key, KeyValueStore};
