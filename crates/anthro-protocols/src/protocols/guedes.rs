use anthro_core::models::gender::Gender;
use anthro_core::models::protocol::ProtocolId;
use anthro_core::models::site::SkinfoldSite;

use crate::formulas::log_density;
use crate::{Estimate, Protocol};

/// Guedes (1985) three-site equations for Brazilian adults.
/// Logarithmic in the sum, no age term.
pub struct Guedes;

const MALE_SITES: [SkinfoldSite; 3] = [
    SkinfoldSite::Triceps,
    SkinfoldSite::Suprailiac,
    SkinfoldSite::Abdominal,
];

const FEMALE_SITES: [SkinfoldSite; 3] = [
    SkinfoldSite::Thigh,
    SkinfoldSite::Suprailiac,
    SkinfoldSite::Subscapular,
];

impl Protocol for Guedes {
    fn id(&self) -> ProtocolId {
        ProtocolId::Guedes
    }

    fn name(&self) -> &str {
        "Guedes 3 dobras"
    }

    fn description(&self) -> &str {
        "Three sex-specific sites, logarithmic in the sum."
    }

    fn required_sites(&self, gender: Gender) -> &'static [SkinfoldSite] {
        match gender {
            Gender::Male => &MALE_SITES,
            Gender::Female => &FEMALE_SITES,
        }
    }

    fn estimate(&self, sum_mm: f64, _age: u32, gender: Gender) -> Estimate {
        let density = match gender {
            Gender::Male => log_density(1.17136, 0.06706, sum_mm),
            Gender::Female => log_density(1.16650, 0.07063, sum_mm),
        };
        Estimate::Density(density)
    }
}
