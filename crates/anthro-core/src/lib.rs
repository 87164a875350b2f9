//! anthro-core
//!
//! Pure domain types for the anthropometric engine: measurement sets,
//! skinfold sites, protocol identifiers, computed results and history
//! records. No computation beyond parsing and age arithmetic lives here.

pub mod age;
pub mod error;
pub mod models;
pub mod parse;
