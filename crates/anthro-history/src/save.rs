//! The save path: validate, compute, build the record, reconcile.

use anthro_core::models::gender::Gender;
use anthro_core::models::history::HistoryRecord;
use anthro_core::models::measurement::MeasurementSet;
use anthro_core::models::protocol::ProtocolId;
use anthro_core::models::result::ComputedResult;
use anthro_protocols::calculator::compute;
use anthro_protocols::validate::ensure_complete;

use crate::error::HistoryError;
use crate::reconcile::reconcile_history;

/// What a successful save hands back to the host for persisting.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    pub result: ComputedResult,
    pub record: HistoryRecord,
    pub history: Vec<HistoryRecord>,
    /// An existing entry was overwritten rather than appended.
    pub replaced: bool,
}

/// Everything that identifies one save.
#[derive(Debug, Clone, Copy)]
pub struct SaveRequest<'a> {
    pub set: &'a MeasurementSet,
    pub age: u32,
    pub gender: Gender,
    pub protocol: ProtocolId,
    /// Date of the entry being edited; `None` for a new entry.
    pub edit_date: Option<&'a str>,
}

/// Run the save gate and produce the updated history.
///
/// Nothing is returned on failure, so a refused save cannot leave a partial
/// write behind.
pub fn prepare_save(
    request: SaveRequest<'_>,
    history: &[HistoryRecord],
) -> Result<SaveOutcome, HistoryError> {
    ensure_complete(request.set, Some(request.protocol), request.gender)?;

    let record_date = request
        .set
        .procedure_date
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .or(request.edit_date)
        .ok_or(HistoryError::MissingDate)?;
    let key_date = request.edit_date.unwrap_or(record_date);

    let result = compute(request.set, request.age, request.gender, request.protocol);
    let record = HistoryRecord::from_result(record_date, request.set, &result, request.protocol);
    let replaced = history.iter().any(|entry| entry.date == key_date);
    let history = reconcile_history(history, record.clone(), key_date);

    Ok(SaveOutcome {
        result,
        record,
        history,
        replaced,
    })
}
