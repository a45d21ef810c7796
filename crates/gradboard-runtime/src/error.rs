use std::fmt;

/// Result type for gradboard-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Transport failure (connection refused, reset, timeout)
    Http(reqwest::Error),

    /// Server answered with a non-2xx status
    Status { endpoint: String, status: u16 },

    /// Response body could not be parsed into the expected shape
    Decode { endpoint: String, message: String },

    /// Payload parsed but lacked the keys a chart needs
    Chart(gradboard_engine::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// No chart with this id is configured
    UnknownChart(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "Network error: {}", err),
            Error::Status { status, .. } => write!(f, "HTTP error! status: {}", status),
            Error::Decode { endpoint, message } => {
                write!(f, "Invalid response from {}: {}", endpoint, message)
            }
            Error::Chart(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::UnknownChart(id) => write!(f, "Unknown chart: {}", id),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Chart(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Status { .. }
            | Error::Decode { .. }
            | Error::Config(_)
            | Error::UnknownChart(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<gradboard_engine::Error> for Error {
    fn from(err: gradboard_engine::Error) -> Self {
        Error::Chart(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
