use thiserror::Error;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Malformed query string: {0}")]
    MalformedQuery(String),

    #[error("Host environment unavailable: {0}")]
    HostUnavailable(String),

    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
