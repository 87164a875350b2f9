//! Save-time validation.
//!
//! Live computation tolerates any gap in the inputs; persisting a result
//! does not. Before a save the host asks which of the protocol's required
//! sites are still missing and shows those exact labels to the user.

use anthro_core::models::gender::Gender;
use anthro_core::models::measurement::MeasurementSet;
use anthro_core::models::protocol::ProtocolId;
use anthro_core::models::site::SkinfoldSite;
use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use crate::error::ProtocolError;
use crate::registry::{protocol, resolve_required_fields};

/// A required measurement that has no value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MissingField {
    pub site: SkinfoldSite,
    pub label: String,
}

impl From<SkinfoldSite> for MissingField {
    fn from(site: SkinfoldSite) -> Self {
        Self {
            site,
            label: site.label().to_string(),
        }
    }
}

/// List the required skinfolds absent from `set`, in protocol order.
///
/// `protocol_id` of `None` uses the set's own selector, which in turn
/// defaults to 7-site Jackson-Pollock. An explicit zero counts as present.
pub fn validate_for_save(
    set: &MeasurementSet,
    protocol_id: Option<ProtocolId>,
    gender: Gender,
) -> Vec<MissingField> {
    let effective = protocol_id.unwrap_or_else(|| set.effective_protocol(ProtocolId::default()));
    set.skinfolds
        .missing(resolve_required_fields(effective, gender))
        .into_iter()
        .map(MissingField::from)
        .collect()
}

/// [`validate_for_save`] as a `Result`, for hosts that gate writes with `?`.
pub fn ensure_complete(
    set: &MeasurementSet,
    protocol_id: Option<ProtocolId>,
    gender: Gender,
) -> Result<(), ProtocolError> {
    let missing = validate_for_save(set, protocol_id, gender);
    if missing.is_empty() {
        return Ok(());
    }

    let effective = protocol_id.unwrap_or_else(|| set.effective_protocol(ProtocolId::default()));
    info!(
        protocol = %effective,
        missing = missing.len(),
        "save refused, required skinfolds missing"
    );
    Err(ProtocolError::IncompleteMeasurements {
        protocol: protocol(effective).name().to_string(),
        missing,
    })
}
