//! Reading time estimate value.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Estimated reading time in minutes.
///
/// `data` is the display value (always rounded up), `detail` is the
/// unrounded estimate. For valid input `data == detail.ceil()`; invalid input
/// produces [`EstimateResult::ZERO`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Whole minutes, rounded up.
    pub data: u64,
    /// Unrounded minutes.
    pub detail: f64,
}

impl EstimateResult {
    /// The estimate returned for invalid or empty input.
    pub const ZERO: Self = Self {
        data: 0,
        detail: 0.0,
    };

    /// Creates a new estimate.
    #[must_use]
    pub const fn new(data: u64, detail: f64) -> Self {
        Self { data, detail }
    }

    /// Returns true if nothing was estimated.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data == 0 && self.detail == 0.0
    }

    /// Returns the unrounded estimate as a duration.
    #[must_use]
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs_f64(self.detail.max(0.0) * 60.0)
    }
}

impl std::fmt::Display for EstimateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min", self.data)
    }
}
