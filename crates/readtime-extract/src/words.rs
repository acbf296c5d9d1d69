//! Word counting.

use tracing::trace;

use crate::Document;

/// Counts the words in `text`.
///
/// Words are the segments left after splitting on the ASCII space character.
/// Runs of spaces, tabs and newlines are not collapsed, so `"a  b"` counts as
/// three words and `"a\nb"` as one.
#[must_use]
pub fn count_words(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    text.split(' ').count()
}

/// Returns the word count of the first element matching `selector`.
///
/// An empty selector, a selector that matches nothing and an element without
/// text all count as 0.
pub fn get_total_words<D>(document: &D, selector: &str) -> usize
where
    D: Document + ?Sized,
{
    if selector.is_empty() {
        return 0;
    }

    let Some(text) = document.query_text(selector) else {
        trace!(selector, "no element matched");
        return 0;
    };

    let words = count_words(&text);
    trace!(selector, words, "counted words");
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HtmlDocument, from_fn};

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("test apple is check"), 4);
        assert_eq!(count_words("single"), 1);
    }

    #[test]
    fn test_count_words_splits_on_space_only() {
        assert_eq!(count_words("two  spaces"), 3);
        assert_eq!(count_words("line\nbreak"), 1);
        assert_eq!(count_words("tab\tseparated words"), 2);
        assert_eq!(count_words(" "), 2);
    }

    #[test]
    fn test_empty_selector() {
        let document = HtmlDocument::parse(r#"<div class="target">test apple is check</div>"#);
        assert_eq!(get_total_words(&document, ""), 0);
    }

    #[test]
    fn test_selector_not_found() {
        let document = HtmlDocument::parse("");
        assert_eq!(get_total_words(&document, ".target"), 0);
    }

    #[test]
    fn test_element_without_text() {
        let document = HtmlDocument::parse(r#"<div class="target"></div>"#);
        assert_eq!(get_total_words(&document, "target"), 0);
        assert_eq!(get_total_words(&document, ".target"), 0);
    }

    #[test]
    fn test_element_with_text() {
        let document = HtmlDocument::parse(r#"<div class="target">test apple is check</div>"#);
        assert_eq!(get_total_words(&document, ".target"), 4);
    }

    #[test]
    fn test_only_first_match_counts() {
        let document = HtmlDocument::parse("<p>one two</p><p>three four five</p>");
        assert_eq!(get_total_words(&document, "p"), 2);
    }

    #[test]
    fn test_document_is_never_queried_for_empty_selector() {
        let document = from_fn(|_| panic!("queried with empty selector"));
        assert_eq!(get_total_words(&document, ""), 0);
    }

    #[test]
    fn test_trait_object() {
        let document = HtmlDocument::parse("<h1>a b c</h1>");
        let dynamic: &dyn Document = &document;
        assert_eq!(get_total_words(dynamic, "h1"), 3);
    }
}
