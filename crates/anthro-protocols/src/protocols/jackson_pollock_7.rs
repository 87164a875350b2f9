use anthro_core::models::gender::Gender;
use anthro_core::models::protocol::ProtocolId;
use anthro_core::models::site::SkinfoldSite;

use crate::formulas::quadratic_density;
use crate::{Estimate, Protocol};

/// Jackson & Pollock (1978/1980) seven-site generalized equations.
/// Same sites for both sexes; sex selects the constants.
pub struct JacksonPollock7;

const SITES: [SkinfoldSite; 7] = [
    SkinfoldSite::Chest,
    SkinfoldSite::Axillary,
    SkinfoldSite::Triceps,
    SkinfoldSite::Subscapular,
    SkinfoldSite::Abdominal,
    SkinfoldSite::Suprailiac,
    SkinfoldSite::Thigh,
];

impl Protocol for JacksonPollock7 {
    fn id(&self) -> ProtocolId {
        ProtocolId::JacksonPollock7
    }

    fn name(&self) -> &str {
        "Jackson & Pollock 7 dobras"
    }

    fn description(&self) -> &str {
        "Generalized adult equation over seven sites, quadratic in the sum with an age term."
    }

    fn required_sites(&self, _gender: Gender) -> &'static [SkinfoldSite] {
        &SITES
    }

    fn requires_age(&self) -> bool {
        true
    }

    fn estimate(&self, sum_mm: f64, age: u32, gender: Gender) -> Estimate {
        let density = match gender {
            Gender::Male => quadratic_density(1.112, 0.00043499, 0.00000055, 0.00028826, sum_mm, age),
            Gender::Female => {
                quadratic_density(1.097, 0.00046971, 0.00000056, 0.00012828, sum_mm, age)
            }
        };
        Estimate::Density(density)
    }
}
