use std::fmt;

/// Result type for garden-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the fallible edges of the crate: decoding backend
/// payloads, parsing skin tags and parsing CSS colours.
///
/// The layout renderer itself never returns one of these.
#[derive(Debug)]
pub enum Error {
    /// A cosmetic key that does not name a known skin.
    UnknownSkin(String),
    /// A colour string that is not `#rgb`, `#rrggbb`, `#rrggbbaa`,
    /// `rgb(..)` or `rgba(..)`.
    InvalidColor(String),
    /// The backend answered with an `{"error": ...}` body.
    Backend(String),
    /// Malformed JSON payload.
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSkin(tag) => write!(f, "unknown skin: {}", tag),
            Error::InvalidColor(css) => write!(f, "invalid colour: {:?}", css),
            Error::Backend(msg) => write!(f, "backend error: {}", msg),
            Error::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
