//! # Formats Module
//!
//! Encodings of [`RecommendationSettings`] for external collaborators.
//!
//! This module contains:
//! - Binary persistence format (postcard + header)
//! - JSON document format
//!
//! Note: File I/O operations remain in the app layer (apps/autotune).
//! This module only handles format conversion (pure transformations).

mod json;
mod persistence;

pub use json::{from_json, to_json};
pub use persistence::{FORMAT_VERSION, HEADER_LEN, MAGIC, from_binary, to_binary};

use crate::RecommendationSettings;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Errors raised while encoding or decoding a settings document.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Input is shorter than the binary header.
    #[error("truncated settings document: {len} bytes, header needs {header}", header = HEADER_LEN)]
    Truncated { len: usize },

    /// Input does not start with the settings magic bytes.
    #[error("not a settings document (bad magic)")]
    BadMagic,

    /// Header carries a version this build cannot read.
    #[error("unsupported settings format version {0} (expected {expected})", expected = FORMAT_VERSION)]
    UnsupportedVersion(u8),

    /// Binary body is followed by unread bytes.
    #[error("{len} trailing bytes after settings document")]
    TrailingBytes { len: usize },

    /// Binary body failed to encode or decode.
    #[error("binary encoding error: {0}")]
    Postcard(#[from] postcard::Error),

    /// JSON document failed to encode or decode.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Format name not recognised.
    #[error("unknown settings format '{0}' (expected 'json' or 'binary')")]
    UnknownFormat(String),
}

// =============================================================================
// FORMAT SELECTION
// =============================================================================

/// On-disk encoding of a settings document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsFormat {
    /// Pretty-printed JSON, `{"threshold": ...}`.
    #[default]
    Json,
    /// Magic + version header followed by a postcard body.
    Binary,
}

impl SettingsFormat {
    /// Encode settings in this format.
    pub fn encode(self, settings: &RecommendationSettings) -> Result<Vec<u8>, FormatError> {
        match self {
            Self::Json => to_json(settings).map(String::into_bytes),
            Self::Binary => to_binary(settings),
        }
    }

    /// Decode settings from bytes in this format.
    pub fn decode(self, bytes: &[u8]) -> Result<RecommendationSettings, FormatError> {
        match self {
            Self::Json => Ok(serde_json::from_slice(bytes)?),
            Self::Binary => from_binary(bytes),
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Binary => "binary",
        }
    }
}

impl FromStr for SettingsFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "binary" => Ok(Self::Binary),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for SettingsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn format_names_parse_case_insensitively() {
        assert_eq!("json".parse::<SettingsFormat>().unwrap(), SettingsFormat::Json);
        assert_eq!("BINARY".parse::<SettingsFormat>().unwrap(), SettingsFormat::Binary);
    }

    #[test]
    fn unknown_format_name_is_rejected() {
        let err = "yaml".parse::<SettingsFormat>().unwrap_err();
        assert!(matches!(err, FormatError::UnknownFormat(ref name) if name == "yaml"));
    }

    #[test]
    fn encode_decode_through_each_format() {
        let settings = RecommendationSettings::with_threshold("0.75");
        for format in [SettingsFormat::Json, SettingsFormat::Binary] {
            let bytes = format.encode(&settings).unwrap();
            assert_eq!(format.decode(&bytes).unwrap(), settings, "format {format}");
        }
    }

    #[test]
    fn json_bytes_are_not_binary() {
        let bytes = SettingsFormat::Json
            .encode(&RecommendationSettings::new())
            .unwrap();
        assert!(SettingsFormat::Binary.decode(&bytes).is_err());
    }
}
