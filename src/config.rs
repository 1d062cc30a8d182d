//! Configuration for transcript rendering.
//!
//! This module provides a plain configuration struct for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use tgtranscript::config::TranscriptConfig;
//!
//! let config = TranscriptConfig::new()
//!     .with_min_time_gap(1800)
//!     .with_strict(false);
//!
//! assert_eq!(config.min_time_gap, 1800);
//! assert!(!config.strict);
//! ```

use serde::{Deserialize, Serialize};

/// Seconds of silence after which a date separator is printed.
pub const DEFAULT_MIN_TIME_GAP: i64 = 3600;

/// Bare `###` separators allowed in a row before the date is reprinted.
pub const DEFAULT_MAX_NO_DATE_RUN: u32 = 100;

/// Controls how messages are rendered into a transcript.
///
/// # Example
///
/// ```rust
/// use tgtranscript::config::TranscriptConfig;
///
/// let config = TranscriptConfig::default();
/// assert_eq!(config.min_time_gap, 3600);
/// assert_eq!(config.max_no_date_run, 100);
/// assert!(config.strict);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptConfig {
    /// A gap strictly greater than this many seconds between two visible
    /// messages prints a `### DATE:` separator (default: 3600)
    pub min_time_gap: i64,

    /// Once more than this many bare separators were printed in a row, the
    /// next separator carries the date again (default: 100)
    pub max_no_date_run: u32,

    /// Abort the run when a visible message lacks a required field; when
    /// `false` the message is skipped with a warning (default: true)
    pub strict: bool,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            min_time_gap: DEFAULT_MIN_TIME_GAP,
            max_no_date_run: DEFAULT_MAX_NO_DATE_RUN,
            strict: true,
        }
    }
}

impl TranscriptConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that skips broken messages instead of failing.
    pub fn lenient() -> Self {
        Self {
            strict: false,
            ..Self::default()
        }
    }

    /// Sets the time gap that triggers a date separator.
    #[must_use]
    pub fn with_min_time_gap(mut self, seconds: i64) -> Self {
        self.min_time_gap = seconds;
        self
    }

    /// Sets how many bare separators may follow each other.
    #[must_use]
    pub fn with_max_no_date_run(mut self, count: u32) -> Self {
        self.max_no_date_run = count;
        self
    }

    /// Sets whether missing required fields abort the run.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TranscriptConfig::new();
        assert_eq!(config.min_time_gap, DEFAULT_MIN_TIME_GAP);
        assert_eq!(config.max_no_date_run, DEFAULT_MAX_NO_DATE_RUN);
        assert!(config.strict);
    }

    #[test]
    fn test_lenient_config() {
        let config = TranscriptConfig::lenient();
        assert!(!config.strict);
        assert_eq!(config.min_time_gap, DEFAULT_MIN_TIME_GAP);
    }

    #[test]
    fn test_builder_chain() {
        let config = TranscriptConfig::new()
            .with_min_time_gap(60)
            .with_max_no_date_run(5)
            .with_strict(false);
        assert_eq!(config.min_time_gap, 60);
        assert_eq!(config.max_no_date_run, 5);
        assert!(!config.strict);
    }

    #[test]
    fn test_serde_partial_config_uses_defaults() {
        let config: TranscriptConfig = serde_json::from_str(r#"{"strict": false}"#).unwrap();
        assert!(!config.strict);
        assert_eq!(config.min_time_gap, DEFAULT_MIN_TIME_GAP);

        let json = serde_json::to_string(&TranscriptConfig::default()).unwrap();
        assert!(json.contains("\"max_no_date_run\":100"));
    }
}
