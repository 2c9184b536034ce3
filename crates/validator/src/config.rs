//! Engine configuration

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Validator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Override-table selector that applies to every field
    pub wildcard_selector: String,

    /// chrono format for timestamps in messages of full-precision rules
    pub timestamp_format: String,

    /// chrono format for timestamps in messages of `_date` rules
    pub date_format: String,

    /// How string length is counted
    pub length_mode: LengthMode,

    /// Number of compiled `regex:` patterns kept around
    pub pattern_cache_capacity: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            wildcard_selector: "*".to_owned(),
            timestamp_format: "%Y-%-m-%-d %-H:%-M:%-S".to_owned(),
            date_format: "%Y-%-m-%-d".to_owned(),
            length_mode: LengthMode::default(),
            pattern_cache_capacity: 64,
        }
    }
}

impl ValidatorConfig {
    /// Loads a configuration from JSON; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error for malformed JSON or mistyped keys.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Pattern cache capacity, at least one.
    pub(crate) fn cache_capacity(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.pattern_cache_capacity).unwrap_or(NonZeroUsize::MIN)
    }
}

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMode {
    /// Count bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    pub fn measure(self, input: &str) -> usize {
        match self {
            Self::Bytes => input.len(),
            Self::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// CLOCK
// ============================================================================

/// Source of "now" for `today`-relative rules.
#[derive(Clone)]
pub struct Clock(Arc<dyn Fn() -> DateTime<FixedOffset> + Send + Sync>);

impl Clock {
    /// Wraps a function returning the current instant.
    pub fn new<F>(now: F) -> Self
    where
        F: Fn() -> DateTime<FixedOffset> + Send + Sync + 'static,
    {
        Self(Arc::new(now))
    }

    /// A clock frozen at `instant`.
    pub fn fixed(instant: DateTime<FixedOffset>) -> Self {
        Self::new(move || instant)
    }

    /// The local wall clock.
    pub fn local() -> Self {
        Self::new(|| Local::now().fixed_offset())
    }

    /// Reads the clock.
    pub fn now(&self) -> DateTime<FixedOffset> {
        (self.0)()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::local()
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Clock").finish_non_exhaustive()
    }
}
