use std::fmt;

/// Result type for gradboard-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while adapting payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An expected key was absent or had the wrong shape
    MalformedPayload { key: String },
}

impl Error {
    pub fn missing(key: impl Into<String>) -> Self {
        Error::MalformedPayload { key: key.into() }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedPayload { key } => {
                write!(f, "Malformed payload: missing or invalid `{}`", key)
            }
        }
    }
}

impl std::error::Error for Error {}
