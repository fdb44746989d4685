//! Infrastructure layer module
//!
//! - Configuration management
//! - Logging infrastructure
//! - Storage backend selection
//! - Project initialization

pub mod config;
pub mod logging;
pub mod setup;
pub mod storage;
