//! anthro-export
//!
//! Report text from a snapshot via Tera templates. Layout to PDF or DOCX
//! happens downstream of this crate.

pub mod error;
pub mod filters;
pub mod render;
