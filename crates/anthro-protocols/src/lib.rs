//! anthro-protocols
//!
//! Skinfold protocol definitions and the body-composition engine built on
//! them. Pure functions over in-memory values: no I/O, no shared state.
//! Each protocol declares its required sites and its estimating equation;
//! the calculator and validator dispatch on [`ProtocolId`] and never carry
//! per-protocol site logic of their own.

pub mod calculator;
pub mod error;
pub mod formulas;
pub mod protocols;
pub mod registry;
pub mod validate;

use anthro_core::models::gender::Gender;
use anthro_core::models::protocol::ProtocolId;
use anthro_core::models::site::SkinfoldSite;

/// What a protocol's equation yields for a given skinfold sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    /// Body density in g/mL, converted to body fat with Siri's equation.
    Density(f64),
    /// Body-fat percentage read directly from the equation.
    Percentage(f64),
    /// The protocol has no estimating equation.
    NotApplicable,
}

/// Trait implemented by each skinfold protocol.
pub trait Protocol: Send + Sync {
    fn id(&self) -> ProtocolId;

    /// Human-readable name (e.g., "Jackson & Pollock 7 dobras").
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Sites that must be measured, in display order.
    fn required_sites(&self, gender: Gender) -> &'static [SkinfoldSite];

    /// Whether the equation needs a positive age.
    fn requires_age(&self) -> bool {
        false
    }

    /// Apply the protocol's equation to the sum of its required sites (mm).
    fn estimate(&self, sum_mm: f64, age: u32, gender: Gender) -> Estimate;
}
