use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Identifier of a skinfold measurement protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProtocolId {
    #[default]
    JacksonPollock7,
    JacksonPollock3,
    DurninWomersley,
    Faulkner,
    Guedes,
    Isak,
}

impl ProtocolId {
    pub const ALL: [ProtocolId; 6] = [
        ProtocolId::JacksonPollock7,
        ProtocolId::JacksonPollock3,
        ProtocolId::DurninWomersley,
        ProtocolId::Faulkner,
        ProtocolId::Guedes,
        ProtocolId::Isak,
    ];

    /// Stable identifier used in stored records.
    pub fn id(&self) -> &'static str {
        match self {
            ProtocolId::JacksonPollock7 => "jackson_pollock_7",
            ProtocolId::JacksonPollock3 => "jackson_pollock_3",
            ProtocolId::DurninWomersley => "durnin_womersley",
            ProtocolId::Faulkner => "faulkner",
            ProtocolId::Guedes => "guedes",
            ProtocolId::Isak => "isak",
        }
    }

    /// Resolve a stored protocol selector to the protocol the engine runs.
    ///
    /// An absent or blank selector yields `fallback`. An unrecognised one
    /// yields 7-site Jackson-Pollock and is logged, since it usually means a
    /// record written by a newer or older client.
    pub fn resolve(selector: Option<&str>, fallback: ProtocolId) -> ProtocolId {
        match selector.map(str::trim) {
            None | Some("") => fallback,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    selector = raw,
                    "unknown protocol selector, using 7-site Jackson-Pollock"
                );
                ProtocolId::JacksonPollock7
            }),
        }
    }
}

impl FromStr for ProtocolId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jackson_pollock_7" | "pollock7" | "jp7" => Ok(ProtocolId::JacksonPollock7),
            "jackson_pollock_3" | "pollock3" | "jp3" => Ok(ProtocolId::JacksonPollock3),
            "durnin_womersley" | "durnin" => Ok(ProtocolId::DurninWomersley),
            "faulkner" => Ok(ProtocolId::Faulkner),
            "guedes" => Ok(ProtocolId::Guedes),
            "isak" => Ok(ProtocolId::Isak),
            _ => Err(CoreError::UnknownProtocol(s.to_string())),
        }
    }
}

impl std::fmt::Display for ProtocolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
