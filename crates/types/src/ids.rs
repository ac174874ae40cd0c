//! Newtype wrappers for semantic string identifiers.
//!
//! Keeps heading anchors and post URLs from being mixed up with free text
//! (titles, queries, previews) that flows through the same code paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The `id` attribute of a heading element, used as an outline link target.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnchorId(Arc<str>);

impl AnchorId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Anchor id synthesized for a heading without one: `heading-<index>`.
    pub fn synthesized(index: usize) -> Self {
        Self(format!("heading-{index}").into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The in-page fragment form, `#<id>`.
    pub fn fragment(&self) -> String {
        format!("#{}", self.0)
    }
}

impl From<String> for AnchorId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for AnchorId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for AnchorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The site-relative URL of a post, as written by the site build.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostUrl(Arc<str>);

impl PostUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PostUrl {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for PostUrl {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for PostUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_id_creation() {
        let id1 = AnchorId::new("section-1");
        let id2 = AnchorId::from("section-1");
        let id3 = AnchorId::from(String::from("section-1"));

        assert_eq!(id1, id2);
        assert_eq!(id2, id3);
        assert_eq!(id1.as_str(), "section-1");
    }

    #[test]
    fn test_synthesized_anchor_uses_heading_index() {
        assert_eq!(AnchorId::synthesized(0).as_str(), "heading-0");
        assert_eq!(AnchorId::synthesized(12).as_str(), "heading-12");
    }

    #[test]
    fn test_fragment() {
        assert_eq!(AnchorId::new("intro").fragment(), "#intro");
    }

    #[test]
    fn test_post_url_is_transparent_in_json() {
        let url: PostUrl = serde_json::from_str("\"/2024/01/hello/\"").unwrap();
        assert_eq!(url.as_str(), "/2024/01/hello/");
    }
}
