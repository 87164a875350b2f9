use anthro_core::models::history::HistoryRecord;
use anthro_core::models::protocol::ProtocolId;
use anthro_history::reconcile::{chronological, latest, reconcile_history, remove_entry};
use proptest::prelude::*;

fn record(date: &str, weight: f64) -> HistoryRecord {
    HistoryRecord {
        date: date.to_string(),
        weight: Some(weight),
        height: Some(1.75),
        bmi: 0.0,
        waist: None,
        body_fat_pct: 0.0,
        fat_mass_kg: 0.0,
        lean_mass_kg: 0.0,
        protocol: ProtocolId::default(),
    }
}

#[test]
fn new_date_is_appended() {
    let history = vec![record("2024-01-01", 80.0)];
    let updated = reconcile_history(&history, record("2024-02-01", 79.0), "2024-02-01");
    assert_eq!(updated.len(), 2);
    assert_eq!(updated[1].date, "2024-02-01");
}

#[test]
fn existing_date_is_replaced_in_place() {
    let history = vec![
        record("2024-01-01", 80.0),
        record("2024-02-01", 79.0),
        record("2024-03-01", 78.0),
    ];
    let updated = reconcile_history(&history, record("2024-02-01", 77.5), "2024-02-01");
    assert_eq!(updated.len(), 3);
    assert_eq!(updated[1].weight, Some(77.5));
    assert_eq!(updated[2].date, "2024-03-01");
}

#[test]
fn editing_can_move_an_entry_to_a_new_date() {
    let history = vec![record("2024-01-01", 80.0), record("2024-02-01", 79.0)];
    let updated = reconcile_history(&history, record("2024-02-03", 79.0), "2024-02-01");
    let dates: Vec<_> = updated.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-01-01", "2024-02-03"]);
}

#[test]
fn caller_history_is_untouched() {
    let history = vec![record("2024-01-01", 80.0)];
    let snapshot = history.clone();
    let _ = reconcile_history(&history, record("2024-01-01", 70.0), "2024-01-01");
    assert_eq!(history, snapshot);
}

#[test]
fn dates_compare_as_opaque_strings() {
    let history = vec![record("2024-01-01", 80.0)];
    let updated = reconcile_history(&history, record("01/01/2024", 79.0), "01/01/2024");
    assert_eq!(updated.len(), 2);
}

#[test]
fn remove_drops_only_the_matching_date() {
    let history = vec![record("2024-01-01", 80.0), record("2024-02-01", 79.0)];
    let updated = remove_entry(&history, "2024-01-01");
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].date, "2024-02-01");
    assert_eq!(history.len(), 2);
}

#[test]
fn chronological_sorts_by_calendar_date() {
    let history = vec![
        record("2024-03-01", 78.0),
        record("garbage", 0.0),
        record("2023-12-15", 81.0),
        record("2024-01-01", 80.0),
    ];
    let dates: Vec<_> = chronological(&history)
        .into_iter()
        .map(|r| r.date.as_str())
        .collect();
    assert_eq!(dates, vec!["2023-12-15", "2024-01-01", "2024-03-01", "garbage"]);
}

#[test]
fn latest_ignores_position() {
    let history = vec![record("2024-03-01", 78.0), record("2024-01-01", 80.0)];
    assert_eq!(latest(&history).unwrap().date, "2024-03-01");
    assert!(latest(&[]).is_none());
}

proptest! {
    #[test]
    fn upsert_twice_leaves_one_entry(
        existing in proptest::collection::vec(0u32..20, 0..10),
        day in 0u32..20,
        first in 40.0f64..120.0,
        second in 40.0f64..120.0,
    ) {
        let history: Vec<_> = existing
            .iter()
            .map(|d| format!("2024-01-{:02}", d + 1))
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .map(|d| record(&d, 80.0))
            .collect();
        let key = format!("2024-01-{:02}", day + 1);

        let once = reconcile_history(&history, record(&key, first), &key);
        let twice = reconcile_history(&once, record(&key, second), &key);

        let matching: Vec<_> = twice.iter().filter(|r| r.date == key).collect();
        prop_assert_eq!(matching.len(), 1);
        prop_assert_eq!(matching[0], &record(&key, second));
        prop_assert_eq!(twice.len(), once.len());
    }
}
