//! anthro-history
//!
//! Longitudinal series of finalized assessments. Every operation takes the
//! current history by reference and returns a new one; the caller's copy is
//! never touched.

pub mod error;
pub mod reconcile;
pub mod save;
pub mod staleness;
