use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: jiff::Error,
    },

    #[error("unknown protocol: {0}")]
    UnknownProtocol(String),

    #[error("unknown gender: {0}")]
    UnknownGender(String),
}
