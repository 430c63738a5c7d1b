use thiserror::Error;

/// Unified error type for the roman and semver codecs
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Value error: {0}")]
    Value(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Conversion error: {0}")]
    Interop(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in roman-semver
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// Create a syntax error for input that does not follow the grammar
    pub fn syntax(msg: impl Into<String>) -> Self {
        CodecError::Syntax(msg.into())
    }

    /// Create a value error for a number outside of the accepted domain
    pub fn value(msg: impl Into<String>) -> Self {
        CodecError::Value(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CodecError::Config(msg.into())
    }

    /// Create a conversion error for values rejected by the `semver` crate
    pub fn interop(msg: impl Into<String>) -> Self {
        CodecError::Interop(msg.into())
    }

    /// Whether the error was raised by a grammar check
    pub fn is_syntax(&self) -> bool {
        matches!(self, CodecError::Syntax(_))
    }
}

impl From<toml::de::Error> for CodecError {
    fn from(err: toml::de::Error) -> Self {
        CodecError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CodecError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("key = ").unwrap_err();
        let err: CodecError = toml_err.into();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_is_syntax() {
        assert!(CodecError::syntax("x").is_syntax());
        assert!(!CodecError::value("x").is_syntax());
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (CodecError::syntax("x"), "Syntax error"),
            (CodecError::value("x"), "Value error"),
            (CodecError::config("x"), "Configuration error"),
            (CodecError::interop("x"), "Conversion error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_special_characters_in_messages() {
        let special_chars = vec![
            "message with\nnewline",
            "message with 'quotes'",
            "message with \"double quotes\"",
            "message with \\ backslash",
        ];

        for msg in special_chars {
            let err = CodecError::syntax(msg);
            assert!(err.to_string().contains(msg));
        }
    }
}
