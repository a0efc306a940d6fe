use std::fmt;
use std::path::PathBuf;

/// Result type for shopcat-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while fetching a product list
#[derive(Debug)]
pub enum Error {
    /// Request could not be sent or the body could not be read
    Http(reqwest::Error),

    /// Endpoint answered with a non-success status
    Status { url: String, status: u16 },

    /// Snapshot file could not be read
    Snapshot { path: PathBuf, source: std::io::Error },

    /// Body was not valid JSON
    Json(serde_json::Error),

    /// Body was JSON but not a product array
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Status { url, status } => {
                write!(f, "{} responded with status {}", url, status)
            }
            Error::Snapshot { path, source } => {
                write!(f, "Cannot read snapshot {}: {}", path.display(), source)
            }
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Snapshot { source, .. } => Some(source),
            Error::Json(err) => Some(err),
            Error::Status { .. } | Error::Parse(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
