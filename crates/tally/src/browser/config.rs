//! Counter configuration coming from JavaScript.
//!
//! The browser entry point receives an arbitrary JS value. It is passed
//! through `JSON.stringify` and decoded here, so this part runs natively too.

use tally_widgets::CounterConfig;
use thiserror::Error;

/// Error decoding a configuration object.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Not valid JSON, or fields of the wrong type
    #[error("invalid counter config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode the stringified configuration.
///
/// `None` (JS `undefined`) and `"null"` both mean "all defaults".
pub fn parse_config(json: Option<&str>) -> Result<CounterConfig, ConfigError> {
    match json.map(str::trim) {
        None | Some("null" | "") => Ok(CounterConfig::default()),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_and_null_use_defaults() {
        assert_eq!(parse_config(None).unwrap(), CounterConfig::default());
        assert_eq!(parse_config(Some("null")).unwrap(), CounterConfig::default());
        assert_eq!(parse_config(Some("{}")).unwrap(), CounterConfig::default());
    }

    #[test]
    fn test_fields_are_read() {
        let config = parse_config(Some(r#"{"start": 5, "step": 10}"#)).unwrap();
        assert_eq!(config.start(), 5);
        assert_eq!(config.step(), 10);
    }

    #[test]
    fn test_partial_object() {
        let config = parse_config(Some(r#"{"step": 3}"#)).unwrap();
        assert_eq!(config.start(), 0);
        assert_eq!(config.step(), 3);
    }

    #[test]
    fn test_bad_input_is_error() {
        let err = parse_config(Some(r#"{"start": "x"}"#)).unwrap_err();
        assert!(err.to_string().starts_with("invalid counter config"));
        assert!(parse_config(Some("42")).is_err());
        assert!(parse_config(Some("{")).is_err());
    }
}
