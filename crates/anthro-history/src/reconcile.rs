use anthro_core::age::parse_date;
use anthro_core::models::history::HistoryRecord;
use tracing::debug;

/// Merge `record` into `history`, keyed by `key_date`.
///
/// `key_date` is the date of the entry being edited, or the record's own
/// date for a new entry. An entry whose date equals `key_date` is replaced
/// in place; otherwise the record is appended. Dates compare as plain
/// strings.
pub fn reconcile_history(
    history: &[HistoryRecord],
    record: HistoryRecord,
    key_date: &str,
) -> Vec<HistoryRecord> {
    let mut updated = history.to_vec();
    match updated.iter().position(|entry| entry.date == key_date) {
        Some(index) => {
            debug!(key_date, index, "history entry updated in place");
            updated[index] = record;
        }
        None => {
            debug!(key_date, "history entry appended");
            updated.push(record);
        }
    }
    updated
}

/// `history` without the entry dated `date`.
pub fn remove_entry(history: &[HistoryRecord], date: &str) -> Vec<HistoryRecord> {
    history
        .iter()
        .filter(|entry| entry.date != date)
        .cloned()
        .collect()
}

/// Entries ordered by calendar date for charting.
///
/// Entries whose date does not parse keep their relative order and sort
/// after every dated entry.
pub fn chronological(history: &[HistoryRecord]) -> Vec<&HistoryRecord> {
    let mut entries: Vec<_> = history
        .iter()
        .map(|entry| (parse_date(&entry.date).ok(), entry))
        .collect();
    entries.sort_by_key(|(date, _)| (date.is_none(), *date));
    entries.into_iter().map(|(_, entry)| entry).collect()
}

/// The most recent entry by calendar date.
pub fn latest(history: &[HistoryRecord]) -> Option<&HistoryRecord> {
    history
        .iter()
        .filter_map(|entry| parse_date(&entry.date).ok().map(|date| (date, entry)))
        .max_by_key(|(date, _)| *date)
        .map(|(_, entry)| entry)
}
