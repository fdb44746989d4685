//! Domain layer for taskdeck
//!
//! This module contains the task model, filter criteria, and storage ports.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
