use thiserror::Error;

/// Top-level error type for Babel.
#[derive(Debug, Error)]
pub enum BabelError {
    /// Error from the language preference store.
    #[error("store error: {0}")]
    Store(String),

    /// Error from a translation backend.
    #[error("translator error: {0}")]
    Translator(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err = BabelError::from(io_err);
        let display = format!("{err}");
        assert!(
            display.contains("io error"),
            "expected 'io error' in display, got: {display}"
        );
        assert!(
            display.contains("file missing"),
            "expected 'file missing' in display, got: {display}"
        );
    }

    #[test]
    fn test_store_error_display() {
        let err = BabelError::Store("table missing".into());
        assert_eq!(format!("{err}"), "store error: table missing");
    }

    #[test]
    fn test_translator_error_display() {
        let err = BabelError::Translator("throttled".into());
        assert_eq!(format!("{err}"), "translator error: throttled");
    }
}
