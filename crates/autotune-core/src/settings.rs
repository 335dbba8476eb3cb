//! # Settings Module
//!
//! The recommendation settings value object.
//!
//! The threshold is opaque text. It is presumably a ratio or percentage in
//! the recommendation engine, but this layer never parses or validates it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Settings consumed by the recommendation engine.
///
/// A leaf value object holding zero or one threshold value. Every operation
/// is a plain field access and cannot fail.
///
/// Mutation requires `&mut self`; there is no internal synchronization.
/// Holders sharing one instance across threads must guard it themselves,
/// e.g. with a `Mutex<RecommendationSettings>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecommendationSettings {
    #[serde(default)]
    threshold: Option<String>,
}

impl RecommendationSettings {
    /// Create settings with no threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create settings holding the given threshold.
    #[must_use]
    pub fn with_threshold(threshold: impl Into<String>) -> Self {
        Self {
            threshold: Some(threshold.into()),
        }
    }

    /// The current threshold, or `None` if it was never set (or was cleared).
    #[must_use]
    pub fn threshold(&self) -> Option<&str> {
        self.threshold.as_deref()
    }

    /// Replace the threshold. Any text is accepted, including the empty string.
    pub fn set_threshold(&mut self, threshold: impl Into<String>) {
        self.threshold = Some(threshold.into());
    }

    /// Replace the threshold with a possibly absent value.
    ///
    /// Returns the previous value.
    pub fn replace_threshold(&mut self, threshold: Option<String>) -> Option<String> {
        std::mem::replace(&mut self.threshold, threshold)
    }

    /// Drop the threshold, leaving it absent.
    pub fn clear_threshold(&mut self) {
        self.threshold = None;
    }

    /// Check whether a threshold is stored.
    #[must_use]
    pub fn has_threshold(&self) -> bool {
        self.threshold.is_some()
    }
}

/// Diagnostic rendering: `RecommendationSettings{threshold=<value>}`.
///
/// An absent threshold renders as `null`. Not meant for round-tripping;
/// use [`crate::formats`] for that.
impl fmt::Display for RecommendationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RecommendationSettings{{threshold={}}}",
            self.threshold.as_deref().unwrap_or("null")
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
