//! Pure materialization logic, separated from table lifecycle so the
//! temporal semantics are testable without a database.

pub mod dense;
pub mod events;
