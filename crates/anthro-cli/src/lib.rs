//! anthro-cli library root.
//!
//! Exposes the config, case-file and command layers so integration tests
//! can drive them without spawning the binary.

pub mod case;
pub mod cli;
pub mod commands;
pub mod config;
