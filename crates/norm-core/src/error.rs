//! Unified error types for the normalizer.
//!
//! Normalization itself never fails; these errors cover the edges: resolving
//! pipeline and locale names, loading configuration, and host I/O.

/// Main error type for normalizer setup and I/O.
#[derive(Debug, thiserror::Error)]
pub enum NormError {
    /// A cleaner pipeline name could not be resolved.
    #[error("unknown cleaner: {0}")]
    UnknownCleaner(String),

    /// A locale name could not be resolved.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience type alias for Results with NormError.
pub type NormResult<T> = Result<T, NormError>;

impl NormError {
    /// Create an unknown cleaner error.
    pub fn unknown_cleaner(name: impl Into<String>) -> Self {
        Self::UnknownCleaner(name.into())
    }

    /// Create an unknown locale error.
    pub fn unknown_locale(name: impl Into<String>) -> Self {
        Self::UnknownLocale(name.into())
    }

    /// Create a config error with message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_json::Error> for NormError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NormError::unknown_cleaner("french_cleaners");
        assert_eq!(err.to_string(), "unknown cleaner: french_cleaners");

        let err = NormError::config("empty cleaner list");
        assert_eq!(err.to_string(), "configuration error: empty cleaner list");
    }

    #[test]
    fn test_error_constructors() {
        let err = NormError::unknown_locale("fr");
        assert!(matches!(err, NormError::UnknownLocale(_)));
        assert_eq!(err.to_string(), "unknown locale: fr");
    }

    #[test]
    fn test_json_error_conversion() {
        let err: NormError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, NormError::Serialization(_)));
    }
}
