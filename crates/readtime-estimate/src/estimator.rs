//! Reading time estimation logic.

use std::sync::OnceLock;

use readtime_types::{DEFAULT_WORDS_PER_MINUTE, EstimateResult, resolve_words_per_minute};

/// Scale applied to the leftover fraction of a minute.
///
/// Keeps the fraction in `[0, 0.6)` so the decimals of
/// [`EstimateResult::detail`] read as seconds.
pub const SECONDS_FACTOR: f64 = 0.6;

/// Static estimator instance.
static ESTIMATOR: OnceLock<Estimator> = OnceLock::new();

/// Estimates reading time for `total_words` at `words_per_minute`.
///
/// A word count that is NaN, infinite or below 1 yields
/// [`EstimateResult::ZERO`]. A reading speed that is NaN, infinite or below 1
/// is replaced by [`DEFAULT_WORDS_PER_MINUTE`].
///
/// `data` saturates at `u64::MAX` for estimates beyond that many minutes;
/// `detail` keeps the unrounded value.
///
/// ```
/// use readtime_estimate::calculate;
///
/// let estimate = calculate(1501.0, 100.0);
/// assert_eq!(estimate.data, 16);
/// assert_eq!(calculate(0.0, 200.0).data, 0);
/// ```
#[must_use]
pub fn calculate(total_words: f64, words_per_minute: f64) -> EstimateResult {
    if !total_words.is_finite() || total_words < 1.0 {
        return EstimateResult::ZERO;
    }

    let words_per_minute = resolve_words_per_minute(words_per_minute);

    let minutes = total_words / words_per_minute;
    let whole = minutes.trunc();
    let fraction = minutes % 1.0;
    let detail = whole + fraction * SECONDS_FACTOR;

    EstimateResult::new(detail.ceil() as u64, detail)
}

/// Reading time estimator bound to a reading speed.
#[derive(Debug, Clone)]
pub struct Estimator {
    /// Reading speed in words per minute.
    words_per_minute: f64,
}

impl Estimator {
    /// Creates a new estimator with the specified reading speed.
    ///
    /// Invalid speeds fall back to [`DEFAULT_WORDS_PER_MINUTE`].
    #[must_use]
    pub fn new(words_per_minute: f64) -> Self {
        Self {
            words_per_minute: resolve_words_per_minute(words_per_minute),
        }
    }

    /// Returns the global estimator instance with default settings.
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR.get_or_init(|| Self::new(DEFAULT_WORDS_PER_MINUTE))
    }

    /// Returns the reading speed in words per minute.
    #[must_use]
    pub const fn words_per_minute(&self) -> f64 {
        self.words_per_minute
    }

    /// Estimates reading time for a word count.
    #[must_use]
    pub fn estimate(&self, words: usize) -> EstimateResult {
        calculate(words as f64, self.words_per_minute)
    }

    /// Formats an estimate as a "N min read" label.
    #[must_use]
    pub fn format_minutes(estimate: &EstimateResult) -> String {
        format!("{} min read", estimate.data)
    }

    /// Formats the unrounded estimate in human-readable form (e.g., "4m 30s", "45s").
    ///
    /// The decimals of [`EstimateResult::detail`] are read as seconds.
    #[must_use]
    pub fn format_detail(estimate: &EstimateResult) -> String {
        let detail = estimate.detail.max(0.0);
        let minutes = detail.trunc() as u64;
        let seconds = ((detail.fract() * 100.0).round() as u64).min(59);

        if minutes > 0 {
            if seconds > 0 {
                format!("{}m {}s", minutes, seconds)
            } else {
                format!("{}m", minutes)
            }
        } else {
            format!("{}s", seconds)
        }
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS_PER_MINUTE)
    }
}
