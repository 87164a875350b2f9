use anthro_core::models::gender::Gender;
use anthro_core::models::protocol::ProtocolId;
use anthro_core::models::site::SkinfoldSite;

use crate::{Estimate, Protocol};

/// ISAK full profile: all nine skinfold sites. A data-collection profile,
/// so only the skinfold sum is derived.
pub struct Isak;

const SITES: [SkinfoldSite; 9] = [
    SkinfoldSite::Triceps,
    SkinfoldSite::Biceps,
    SkinfoldSite::Subscapular,
    SkinfoldSite::Suprailiac,
    SkinfoldSite::Abdominal,
    SkinfoldSite::Thigh,
    SkinfoldSite::Calf,
    SkinfoldSite::Axillary,
    SkinfoldSite::Chest,
];

impl Protocol for Isak {
    fn id(&self) -> ProtocolId {
        ProtocolId::Isak
    }

    fn name(&self) -> &str {
        "ISAK (perfil completo)"
    }

    fn description(&self) -> &str {
        "Full nine-site ISAK profile; reports the skinfold sum."
    }

    fn required_sites(&self, _gender: Gender) -> &'static [SkinfoldSite] {
        &SITES
    }

    fn estimate(&self, _sum_mm: f64, _age: u32, _gender: Gender) -> Estimate {
        Estimate::NotApplicable
    }
}
