use anthro_core::age::parse_date;
use anthro_core::models::history::HistoryRecord;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ts_rs::TS;

/// Days after the last assessment before a reassessment is advised.
pub const DEFAULT_THRESHOLD_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StalenessPolicy {
    pub threshold_days: i64,
}

impl Default for StalenessPolicy {
    fn default() -> Self {
        Self {
            threshold_days: DEFAULT_THRESHOLD_DAYS,
        }
    }
}

/// Advisory on how long ago the last assessment was. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Staleness {
    pub stale: bool,
    pub days_since_last: i64,
    pub last_date: Option<Date>,
}

impl StalenessPolicy {
    /// Compare the most recent dated entry against `now`.
    ///
    /// An empty history, or one without a parsable date, is never stale.
    /// Stale means strictly more than `threshold_days` have elapsed.
    pub fn evaluate(&self, history: &[HistoryRecord], now: Date) -> Staleness {
        let last = history
            .iter()
            .filter_map(|entry| match parse_date(&entry.date) {
                Ok(date) => Some(date),
                Err(e) => {
                    warn!(date = %entry.date, error = %e, "history entry has an unparsable date");
                    None
                }
            })
            .max();

        let Some(last) = last else {
            return Staleness {
                stale: false,
                days_since_last: 0,
                last_date: None,
            };
        };

        let days = now
            .since(last)
            .map(|span| i64::from(span.get_days()))
            .unwrap_or(0)
            .max(0);
        let stale = days > self.threshold_days;
        if stale {
            info!(%last, days, "last assessment is stale");
        }

        Staleness {
            stale,
            days_since_last: days,
            last_date: Some(last),
        }
    }
}

/// [`StalenessPolicy::evaluate`] with the default 30-day threshold.
pub fn is_stale(history: &[HistoryRecord], now: Date) -> Staleness {
    StalenessPolicy::default().evaluate(history, now)
}
