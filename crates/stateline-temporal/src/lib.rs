//! # stateline-temporal
//!
//! Temporal state materialization engine. Given facts about entities
//! that hold over time — labeled intervals or timestamped boolean
//! events — it rebuilds a sparse snapshot table with one row per
//! (entity, as-of date) pair, indexed for point-in-time filtering.

pub mod builder;
pub mod engine;

pub use engine::SparseTableBuilder;
