//! JSON settings document: `{"threshold": "0.5"}`.
//!
//! An absent threshold is written as `null`. A missing key reads back as
//! absent; unknown keys are rejected.

use super::FormatError;
use crate::RecommendationSettings;

/// Encode settings as a pretty-printed JSON document.
pub fn to_json(settings: &RecommendationSettings) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(settings)?)
}

/// Decode settings from a JSON document.
pub fn from_json(input: &str) -> Result<RecommendationSettings, FormatError> {
    Ok(serde_json::from_str(input)?)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn threshold_is_written_as_text() {
        let json = to_json(&RecommendationSettings::with_threshold("0.5")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["threshold"], "0.5");
    }

    #[test]
    fn absent_threshold_is_written_as_null() {
        let json = to_json(&RecommendationSettings::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["threshold"].is_null());
    }

    #[test]
    fn missing_key_reads_as_absent() {
        let settings = from_json("{}").unwrap();
        assert_eq!(settings.threshold(), None);
    }

    #[test]
    fn empty_string_survives() {
        let settings = from_json(r#"{"threshold": ""}"#).unwrap();
        assert_eq!(settings.threshold(), Some(""));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = from_json(r#"{"threshold": "0.5", "mode": "strict"}"#);
        assert!(matches!(result, Err(FormatError::Json(_))));
    }

    #[test]
    fn numeric_threshold_is_not_coerced() {
        // The document stores text; a bare number is a type error, not a value.
        let result = from_json(r#"{"threshold": 0.5}"#);
        assert!(result.is_err());
    }
}
