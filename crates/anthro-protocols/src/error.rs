use thiserror::Error;

use crate::validate::MissingField;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("measurements incomplete for {protocol}: missing {}", labels(.missing))]
    IncompleteMeasurements {
        protocol: String,
        missing: Vec<MissingField>,
    },
}

fn labels(missing: &[MissingField]) -> String {
    missing
        .iter()
        .map(|m| m.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
