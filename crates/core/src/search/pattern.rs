//! Literal, case-insensitive query matching and highlighting.

use crate::error::KijiError;
use crate::html;
use kiji_types::PostRecord;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

/// A compiled search query.
///
/// The query text is escaped before compilation, so characters such as `.`,
/// `*` or `(` only ever match themselves.
#[derive(Debug, Clone)]
pub struct QueryPattern {
    query: String,
    regex: Regex,
}

impl QueryPattern {
    pub fn new(query: &str) -> Result<Self, KijiError> {
        let regex = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            query: query.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.query
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Whether the query occurs in the post's title or content.
    pub fn matches_post(&self, post: &PostRecord) -> bool {
        self.is_match(&post.title) || self.is_match(&post.content)
    }

    /// Splits `text` into plain and matched runs.
    pub fn highlight(&self, text: &str) -> Highlighted {
        let mut segments = Vec::new();
        let mut last = 0;
        for m in self.regex.find_iter(text).filter(|m| !m.is_empty()) {
            if m.start() > last {
                segments.push(Segment::plain(&text[last..m.start()]));
            }
            segments.push(Segment::marked(m.as_str()));
            last = m.end();
        }
        if last < text.len() {
            segments.push(Segment::plain(&text[last..]));
        }
        Highlighted { segments }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub marked: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            marked: false,
        }
    }

    fn marked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            marked: true,
        }
    }
}

/// Text with its query matches picked out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlighted {
    pub segments: Vec<Segment>,
}

impl Highlighted {
    pub fn match_count(&self) -> usize {
        self.segments.iter().filter(|s| s.marked).count()
    }

    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Escaped markup with each match wrapped in `<mark>`.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            if segment.marked {
                out.push_str("<mark>");
                out.push_str(&html::escape(&segment.text));
                out.push_str("</mark>");
            } else {
                out.push_str(&html::escape(&segment.text));
            }
        }
        out
    }
}

/// Cuts `text` to its first `max_chars` characters, appending `...` when
/// anything was removed.
pub fn truncate_chars(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        let pattern = QueryPattern::new("world").unwrap();
        assert!(pattern.is_match("Hello WORLD"));
        assert!(!pattern.is_match("Hello"));
    }

    #[test]
    fn test_metacharacters_match_literally() {
        let dot = QueryPattern::new("a.c").unwrap();
        assert!(dot.is_match("see a.c here"));
        assert!(!dot.is_match("abc"));

        let star = QueryPattern::new("c*").unwrap();
        assert!(star.is_match("use c* pointers"));
        assert!(!star.is_match("ccc"));

        let paren = QueryPattern::new("f(x").unwrap();
        assert!(paren.is_match("call f(x) now"));
    }

    #[test]
    fn test_highlight_every_occurrence() {
        let pattern = QueryPattern::new("rust").unwrap();
        let highlighted = pattern.highlight("Rust and rust and RUST");
        assert_eq!(highlighted.match_count(), 3);
        assert_eq!(
            highlighted.to_html(),
            "<mark>Rust</mark> and <mark>rust</mark> and <mark>RUST</mark>"
        );
    }

    #[test]
    fn test_highlight_literal_metacharacters() {
        let pattern = QueryPattern::new("1+1").unwrap();
        assert_eq!(
            pattern.highlight("11 or 1+1?").to_html(),
            "11 or <mark>1+1</mark>?"
        );
    }

    #[test]
    fn test_highlight_escapes_surrounding_markup() {
        let pattern = QueryPattern::new("<b>").unwrap();
        assert_eq!(
            pattern.highlight("a <b> tag").to_html(),
            "a <mark>&lt;b&gt;</mark> tag"
        );
    }

    #[test]
    fn test_highlight_without_match_keeps_text() {
        let pattern = QueryPattern::new("zzz").unwrap();
        let highlighted = pattern.highlight("nothing here");
        assert_eq!(highlighted.match_count(), 0);
        assert_eq!(highlighted.plain_text(), "nothing here");
    }

    #[test]
    fn test_highlight_multibyte_text() {
        let pattern = QueryPattern::new("検索").unwrap();
        assert_eq!(
            pattern.highlight("全文検索と簡易検索").to_html(),
            "全文<mark>検索</mark>と簡易<mark>検索</mark>"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_chars("short", 50), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("日本語の文章", 3), "日本語...");
    }
}
