//! Selector request options.

use serde::{Deserialize, Serialize};

/// Reading speed used when none is given or the given one is invalid.
pub const DEFAULT_WORDS_PER_MINUTE: f64 = 200.0;

/// Returns `words_per_minute` if it is a usable reading speed, otherwise
/// [`DEFAULT_WORDS_PER_MINUTE`].
///
/// A speed is usable when it is finite and at least 1.
#[must_use]
pub fn resolve_words_per_minute(words_per_minute: f64) -> f64 {
    if words_per_minute.is_finite() && words_per_minute >= 1.0 {
        words_per_minute
    } else {
        DEFAULT_WORDS_PER_MINUTE
    }
}

/// Which elements to read and how fast.
///
/// Deserializes from `{"selectors": [...], "wordsPerMinute": 250}`; the
/// reading speed may be omitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestTimeOption {
    /// Selectors whose first matching element contributes its words.
    #[serde(default)]
    pub selectors: Vec<String>,
    /// Reading speed in words per minute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words_per_minute: Option<f64>,
}

impl RequestTimeOption {
    /// Creates options for the given selectors at the default reading speed.
    #[must_use]
    pub fn new<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
            words_per_minute: None,
        }
    }

    /// Sets the reading speed.
    #[must_use]
    pub const fn with_words_per_minute(mut self, words_per_minute: f64) -> Self {
        self.words_per_minute = Some(words_per_minute);
        self
    }

    /// Returns the reading speed that will actually be used.
    #[must_use]
    pub fn effective_words_per_minute(&self) -> f64 {
        self.words_per_minute
            .map_or(DEFAULT_WORDS_PER_MINUTE, resolve_words_per_minute)
    }

    /// Parses options from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
