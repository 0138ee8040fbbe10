//! Store error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed for key {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("value for key {key:?} is not valid JSON for its type: {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid store key {0:?}")]
    InvalidKey(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn io(key: &str, source: std::io::Error) -> Self {
        Self::Io {
            key: key.to_string(),
            source,
        }
    }

    pub fn json(key: &str, source: serde_json::Error) -> Self {
        Self::Json {
            key: key.to_string(),
            source,
        }
    }
}
