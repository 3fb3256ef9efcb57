use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for indexer operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for indexer operations
#[derive(Debug)]
pub enum IndexerError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Invalid glob pattern or unreadable glob entry
    Glob(String),
    /// JSON/YAML/TOML (de)serialization error
    Serialize(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for IndexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexerError::Io(err) => write!(f, "IO error: {}", err),
            IndexerError::Config(msg) => write!(f, "Configuration error: {}", msg),
            IndexerError::Glob(msg) => write!(f, "Glob error: {}", msg),
            IndexerError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            IndexerError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for IndexerError {}

impl From<io::Error> for IndexerError {
    fn from(err: io::Error) -> Self {
        IndexerError::Io(err)
    }
}

impl From<glob::PatternError> for IndexerError {
    fn from(err: glob::PatternError) -> Self {
        IndexerError::Glob(err.to_string())
    }
}

impl From<serde_json::Error> for IndexerError {
    fn from(err: serde_json::Error) -> Self {
        IndexerError::Serialize(err.to_string())
    }
}

impl From<String> for IndexerError {
    fn from(msg: String) -> Self {
        IndexerError::Generic(msg)
    }
}

impl From<&str> for IndexerError {
    fn from(msg: &str) -> Self {
        IndexerError::Generic(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = IndexerError::Config("missing source".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing source");

        let err: IndexerError = "plain".into();
        assert_eq!(err.to_string(), "plain");
    }

    #[test]
    fn test_box_result_conversion() {
        fn fails() -> BoxResult<()> {
            Err(IndexerError::Glob("bad pattern [".to_string()).into())
        }
        let err = fails().unwrap_err();
        assert!(err.to_string().contains("bad pattern ["));
    }
}
