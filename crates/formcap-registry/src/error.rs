use std::fmt;

/// Result type for formcap-registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the registry layer
#[derive(Debug)]
pub enum Error {
    /// Descriptor failed shape or identifier validation
    Validation(String),

    /// No form with the requested id, imported or built-in
    NotFound(String),

    /// Malformed JSON on import or a corrupt descriptor file
    Json(serde_json::Error),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "Invalid form descriptor: {}", msg),
            Error::NotFound(id) => write!(f, "Form not found: {}", id),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Validation(_) | Error::NotFound(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<formcap_types::Error> for Error {
    fn from(err: formcap_types::Error) -> Self {
        match err {
            formcap_types::Error::Json(err) => Error::Json(err),
        }
    }
}
