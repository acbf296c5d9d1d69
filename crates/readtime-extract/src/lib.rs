//! Selector-driven word extraction for the readtime estimator.
//!
//! - [`Document`] - Read-only "first element matching a selector" lookup
//! - [`HtmlDocument`] - [`Document`] backed by a parsed HTML tree
//! - [`get_total_words`] - Word count of the element matched by one selector
//! - [`get_time`] - Rounded reading time across a list of selectors

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod document;
mod time;
mod words;

pub use document::{Document, FnDocument, HtmlDocument, from_fn};
pub use time::{get_estimate, get_time, total_words};
pub use words::{count_words, get_total_words};
