//! anthro-snapshot
//!
//! Builds the read-only view of a patient's anthropometric state that the
//! narrative service and the report renderer both consume. A snapshot is
//! computed once per request and shared behind an `Arc`, so every consumer
//! of one request sees the same values.

pub mod builder;
pub mod error;
pub mod model;
pub mod prompt;
