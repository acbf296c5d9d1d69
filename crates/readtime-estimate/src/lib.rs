//! Reading time arithmetic for the readtime estimator.
//!
//! - [`calculate`] - Converts a word count and reading speed into an estimate
//! - [`Estimator`] - Holds a reading speed and formats estimates for display

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;

pub use estimator::{Estimator, SECONDS_FACTOR, calculate};
pub use readtime_types::{DEFAULT_WORDS_PER_MINUTE, EstimateResult};
