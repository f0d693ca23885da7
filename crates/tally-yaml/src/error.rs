//! Error types for manifest loading.

use thiserror::Error;

/// Error type for manifest parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Manifest file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Two widgets share an id
    #[error("Duplicate widget id: {0}")]
    DuplicateId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::MissingField("name".to_string());
        assert_eq!(err.to_string(), "Missing required field: name");

        let err = ParseError::DuplicateId("main".to_string());
        assert_eq!(err.to_string(), "Duplicate widget id: main");

        let err = ParseError::Validation("widget type is empty".to_string());
        assert_eq!(err.to_string(), "Validation error: widget type is empty");
    }

    #[test]
    fn test_parse_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "page.yaml");
        let err = ParseError::from(io);
        assert!(matches!(err, ParseError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_parse_error_from_yaml() {
        let yaml_err = serde_yaml_ng::from_str::<u32>("[").unwrap_err();
        let err = ParseError::from(yaml_err);
        assert!(err.to_string().starts_with("YAML error"));
    }
}
