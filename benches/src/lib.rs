//! Benchmark fixtures for readtime.

use std::fmt::Write;

/// Vocabulary cycled through when generating paragraphs.
const VOCABULARY: &[&str] = &[
    "reading", "time", "is", "an", "estimate", "of", "how", "long", "a", "post", "takes",
    "to", "finish", "at", "steady", "pace",
];

/// Shape of a generated article.
#[derive(Debug, Clone, Copy)]
pub struct ArticleConfig {
    /// Number of `<section>` elements.
    pub sections: usize,
    /// Paragraphs in each section.
    pub paragraphs_per_section: usize,
    /// Words in each paragraph.
    pub words_per_paragraph: usize,
}

impl ArticleConfig {
    /// Total words in the article body, excluding the title.
    pub const fn body_words(&self) -> usize {
        self.sections * self.paragraphs_per_section * self.words_per_paragraph
    }
}

impl Default for ArticleConfig {
    fn default() -> Self {
        Self {
            sections: 5,
            paragraphs_per_section: 4,
            words_per_paragraph: 60,
        }
    }
}

/// Builds an HTML page with a `.title` heading and an `article.post` body.
///
/// Paragraph text has single spaces between words and no line breaks, so the
/// word count of `article.post` equals [`ArticleConfig::body_words`].
pub fn synthetic_article(config: &ArticleConfig) -> String {
    let mut html = String::from("<html><head><title>Bench</title></head><body>");
    html.push_str(r#"<h1 class="title">A generated article</h1><article class="post">"#);

    let mut word = 0;
    for section in 0..config.sections {
        let _ = write!(html, r#"<section id="s{section}">"#);
        for _ in 0..config.paragraphs_per_section {
            html.push_str("<p>");
            for i in 0..config.words_per_paragraph {
                if i > 0 || word > 0 {
                    html.push(' ');
                }
                html.push_str(VOCABULARY[word % VOCABULARY.len()]);
                word += 1;
            }
            html.push_str("</p>");
        }
        html.push_str("</section>");
    }

    html.push_str("</article></body></html>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use readtime_lib::{HtmlDocument, get_total_words};

    #[test]
    fn test_article_word_count() {
        let config = ArticleConfig::default();
        let document = HtmlDocument::parse(&synthetic_article(&config));

        assert_eq!(get_total_words(&document, "article.post"), config.body_words());
        assert_eq!(get_total_words(&document, ".title"), 3);
    }
}
