use anthro_protocols::error::ProtocolError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error(transparent)]
    Incomplete(#[from] ProtocolError),

    #[error("no procedure date to key the history entry")]
    MissingDate,
}
