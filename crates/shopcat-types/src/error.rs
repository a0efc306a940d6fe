use std::fmt;

/// Result type for shopcat-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A sort mode name that is not one of `default`, `price-asc`, `price-desc`
    UnknownSortMode(String),

    /// A theme name that is not `light` or `dark`
    UnknownTheme(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSortMode(name) => write!(
                f,
                "Unknown sort mode '{}' (expected default, price-asc or price-desc)",
                name
            ),
            Error::UnknownTheme(name) => {
                write!(f, "Unknown theme '{}' (expected light or dark)", name)
            }
        }
    }
}

impl std::error::Error for Error {}
