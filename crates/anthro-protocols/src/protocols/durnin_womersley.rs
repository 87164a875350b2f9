use anthro_core::models::gender::Gender;
use anthro_core::models::protocol::ProtocolId;
use anthro_core::models::site::SkinfoldSite;

use crate::formulas::log_density;
use crate::{Estimate, Protocol};

/// Durnin & Womersley (1974) four-site equations.
/// Same sites for both sexes; sex and age band select the constants.
pub struct DurninWomersley;

const SITES: [SkinfoldSite; 4] = [
    SkinfoldSite::Biceps,
    SkinfoldSite::Triceps,
    SkinfoldSite::Subscapular,
    SkinfoldSite::Suprailiac,
];

/// `(c, m)` for `BD = c - m·log10(S)`.
fn constants(age: u32, gender: Gender) -> (f64, f64) {
    match (gender, age) {
        (Gender::Male, 0..=19) => (1.1620, 0.0630),
        (Gender::Male, 20..=29) => (1.1631, 0.0632),
        (Gender::Male, 30..=39) => (1.1422, 0.0544),
        (Gender::Male, 40..=49) => (1.1333, 0.0612),
        (Gender::Male, _) => (1.1715, 0.0779),
        (Gender::Female, 0..=19) => (1.1549, 0.0678),
        (Gender::Female, 20..=29) => (1.1599, 0.0717),
        (Gender::Female, 30..=39) => (1.1423, 0.0632),
        (Gender::Female, 40..=49) => (1.1333, 0.0612),
        (Gender::Female, _) => (1.1339, 0.0645),
    }
}

impl Protocol for DurninWomersley {
    fn id(&self) -> ProtocolId {
        ProtocolId::DurninWomersley
    }

    fn name(&self) -> &str {
        "Durnin & Womersley 4 dobras"
    }

    fn description(&self) -> &str {
        "Four sites, logarithmic in the sum with age- and sex-banded constants."
    }

    fn required_sites(&self, _gender: Gender) -> &'static [SkinfoldSite] {
        &SITES
    }

    fn estimate(&self, sum_mm: f64, age: u32, gender: Gender) -> Estimate {
        let (c, m) = constants(age, gender);
        Estimate::Density(log_density(c, m, sum_mm))
    }
}
