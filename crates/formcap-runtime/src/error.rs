use std::fmt;

/// Result type for formcap-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Registry layer error
    Registry(formcap_registry::Error),

    /// Store layer error
    Store(formcap_store::Error),

    /// Descriptor fetch failed (unreachable source, bad status, non-JSON
    /// body). Recovered by the loader's fallback chain, never fatal.
    Fetch(String),

    /// Configuration error
    Config(String),

    /// A required field was submitted blank; carries the field id to
    /// focus.
    MissingRequired(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Registry(err) => write!(f, "{}", err),
            Error::Store(err) => write!(f, "{}", err),
            Error::Fetch(msg) => write!(f, "Fetch error: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::MissingRequired(field_id) => {
                write!(f, "Required field is empty: {}", field_id)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Registry(err) => Some(err),
            Error::Store(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Fetch(_) | Error::Config(_) | Error::MissingRequired(_) => None,
        }
    }
}

impl From<formcap_registry::Error> for Error {
    fn from(err: formcap_registry::Error) -> Self {
        Error::Registry(err)
    }
}

impl From<formcap_store::Error> for Error {
    fn from(err: formcap_store::Error) -> Self {
        Error::Store(err)
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
