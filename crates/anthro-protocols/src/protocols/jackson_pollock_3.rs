use anthro_core::models::gender::Gender;
use anthro_core::models::protocol::ProtocolId;
use anthro_core::models::site::SkinfoldSite;

use crate::formulas::quadratic_density;
use crate::{Estimate, Protocol};

/// Jackson & Pollock three-site equations.
/// Men: chest, abdominal, thigh. Women: triceps, suprailiac, thigh.
pub struct JacksonPollock3;

const MALE_SITES: [SkinfoldSite; 3] = [
    SkinfoldSite::Chest,
    SkinfoldSite::Abdominal,
    SkinfoldSite::Thigh,
];

const FEMALE_SITES: [SkinfoldSite; 3] = [
    SkinfoldSite::Triceps,
    SkinfoldSite::Suprailiac,
    SkinfoldSite::Thigh,
];

impl Protocol for JacksonPollock3 {
    fn id(&self) -> ProtocolId {
        ProtocolId::JacksonPollock3
    }

    fn name(&self) -> &str {
        "Jackson & Pollock 3 dobras"
    }

    fn description(&self) -> &str {
        "Three sex-specific sites, quadratic in the sum with an age term."
    }

    fn required_sites(&self, gender: Gender) -> &'static [SkinfoldSite] {
        match gender {
            Gender::Male => &MALE_SITES,
            Gender::Female => &FEMALE_SITES,
        }
    }

    fn estimate(&self, sum_mm: f64, age: u32, gender: Gender) -> Estimate {
        let density = match gender {
            Gender::Male => quadratic_density(1.10938, 0.0008267, 0.0000016, 0.0002574, sum_mm, age),
            Gender::Female => {
                quadratic_density(1.0994921, 0.0009929, 0.0000023, 0.0001392, sum_mm, age)
            }
        };
        Estimate::Density(density)
    }
}
