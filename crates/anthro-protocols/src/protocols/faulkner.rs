use anthro_core::models::gender::Gender;
use anthro_core::models::protocol::ProtocolId;
use anthro_core::models::site::SkinfoldSite;

use crate::{Estimate, Protocol};

/// Faulkner (1968) four-site equation. Linear in the sum and gives body
/// fat directly, without a density step.
pub struct Faulkner;

const SITES: [SkinfoldSite; 4] = [
    SkinfoldSite::Triceps,
    SkinfoldSite::Subscapular,
    SkinfoldSite::Suprailiac,
    SkinfoldSite::Abdominal,
];

impl Protocol for Faulkner {
    fn id(&self) -> ProtocolId {
        ProtocolId::Faulkner
    }

    fn name(&self) -> &str {
        "Faulkner 4 dobras"
    }

    fn description(&self) -> &str {
        "Four sites, body fat read linearly from the sum."
    }

    fn required_sites(&self, _gender: Gender) -> &'static [SkinfoldSite] {
        &SITES
    }

    fn estimate(&self, sum_mm: f64, _age: u32, _gender: Gender) -> Estimate {
        Estimate::Percentage(0.153 * sum_mm + 5.783)
    }
}
