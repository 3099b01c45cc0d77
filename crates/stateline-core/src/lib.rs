//! # stateline-core
//!
//! Shared types for the stateline materialization engine:
//! configuration, error taxonomy, and the source/output data models.

pub mod config;
pub mod errors;
pub mod models;

pub use errors::{StateError, StateResult};
