//! The static table of supported protocols.

use anthro_core::models::gender::Gender;
use anthro_core::models::protocol::ProtocolId;
use anthro_core::models::site::SkinfoldSite;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Protocol;
use crate::protocols::durnin_womersley::DurninWomersley;
use crate::protocols::faulkner::Faulkner;
use crate::protocols::guedes::Guedes;
use crate::protocols::isak::Isak;
use crate::protocols::jackson_pollock_3::JacksonPollock3;
use crate::protocols::jackson_pollock_7::JacksonPollock7;

/// The protocol definition for an identifier.
///
/// Every identifier has exactly one definition. Unknown selectors never
/// reach this point: [`ProtocolId::resolve`] maps them to 7-site
/// Jackson-Pollock beforehand.
pub fn protocol(id: ProtocolId) -> &'static dyn Protocol {
    match id {
        ProtocolId::JacksonPollock7 => &JacksonPollock7,
        ProtocolId::JacksonPollock3 => &JacksonPollock3,
        ProtocolId::DurninWomersley => &DurninWomersley,
        ProtocolId::Faulkner => &Faulkner,
        ProtocolId::Guedes => &Guedes,
        ProtocolId::Isak => &Isak,
    }
}

/// Return all registered protocols.
pub fn all_protocols() -> Vec<&'static dyn Protocol> {
    ProtocolId::ALL.iter().map(|id| protocol(*id)).collect()
}

/// Skinfold sites a protocol requires for the given sex, in display order.
pub fn resolve_required_fields(id: ProtocolId, gender: Gender) -> &'static [SkinfoldSite] {
    protocol(id).required_sites(gender)
}

/// Protocol description for pickers and documentation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProtocolInfo {
    pub id: ProtocolId,
    pub name: String,
    pub description: String,
    pub male_sites: Vec<SkinfoldSite>,
    pub female_sites: Vec<SkinfoldSite>,
    pub requires_age: bool,
}

pub fn catalogue() -> Vec<ProtocolInfo> {
    all_protocols()
        .into_iter()
        .map(|p| ProtocolInfo {
            id: p.id(),
            name: p.name().to_string(),
            description: p.description().to_string(),
            male_sites: p.required_sites(Gender::Male).to_vec(),
            female_sites: p.required_sites(Gender::Female).to_vec(),
            requires_age: p.requires_age(),
        })
        .collect()
}
