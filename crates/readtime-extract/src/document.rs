//! Document abstraction and the HTML implementation.

use std::fs;
use std::io::Read;
use std::path::Path;

use readtime_types::{ReadtimeError, Result};
use scraper::{Html, Selector};
use tracing::debug;

/// A read-only source of element text.
pub trait Document {
    /// Returns the text content of the first element matching `selector`,
    /// or `None` when nothing matches.
    fn query_text(&self, selector: &str) -> Option<String>;
}

impl<D> Document for &D
where
    D: Document + ?Sized,
{
    fn query_text(&self, selector: &str) -> Option<String> {
        (**self).query_text(selector)
    }
}

/// An HTML document parsed into a DOM tree.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses a full HTML document.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Parses an HTML fragment (no implied `<html>`/`<body>`).
    #[must_use]
    pub fn parse_fragment(html: &str) -> Self {
        Self {
            html: Html::parse_fragment(html),
        }
    }

    /// Reads and parses an HTML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let html = fs::read_to_string(path).map_err(|source| ReadtimeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&html))
    }

    /// Reads a document from any reader (e.g. stdin) and parses it.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the input is not UTF-8.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let html = std::io::read_to_string(reader)?;
        Ok(Self::parse(&html))
    }
}

impl Document for HtmlDocument {
    fn query_text(&self, selector: &str) -> Option<String> {
        let parsed = match Selector::parse(selector) {
            Ok(parsed) => parsed,
            Err(err) => {
                debug!(selector, error = ?err, "ignoring invalid selector");
                return None;
            }
        };

        let element = self.html.select(&parsed).next()?;
        Some(element.text().collect())
    }
}

/// A [`Document`] answering queries with a closure.
///
/// Created by [`from_fn`].
#[derive(Clone)]
pub struct FnDocument<F> {
    query: F,
}

impl<F> std::fmt::Debug for FnDocument<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnDocument").finish_non_exhaustive()
    }
}

impl<F> Document for FnDocument<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn query_text(&self, selector: &str) -> Option<String> {
        (self.query)(selector)
    }
}

/// Wraps a selector lookup closure as a [`Document`].
///
/// ```
/// use readtime_extract::{Document, from_fn};
///
/// let document = from_fn(|selector| (selector == "#title").then(|| "Hello world".to_string()));
/// assert_eq!(document.query_text("#title").as_deref(), Some("Hello world"));
/// assert_eq!(document.query_text("#body"), None);
/// ```
pub const fn from_fn<F>(query: F) -> FnDocument<F>
where
    F: Fn(&str) -> Option<String>,
{
    FnDocument { query }
}
