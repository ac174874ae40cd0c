use crate::ids::AnchorId;
use serde::Serialize;

/// Heading depth tracked by the outline. Only `h1`..`h3` take part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
}

impl HeadingLevel {
    pub fn from_number(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            _ => None,
        }
    }

    /// Parses an element tag name such as `H2` or `h2`.
    pub fn from_tag_name(tag: &str) -> Option<Self> {
        let mut chars = tag.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some('h' | 'H'), Some(d), None) => d
                .to_digit(10)
                .and_then(|n| u8::try_from(n).ok())
                .and_then(Self::from_number),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based depth below the top level.
    pub fn depth(self) -> u32 {
        u32::from(self.number() - 1)
    }
}

/// An entry in the article outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingEntry {
    pub level: HeadingLevel,
    /// The trimmed text content of the heading.
    pub text: String,
    /// The anchor the outline links to.
    pub anchor_id: AnchorId,
    /// Position in the document-order heading sequence.
    pub index: usize,
    /// `true` when the anchor was synthesized and must be written back to the element.
    pub anchor_assigned: bool,
}

/// Character count and estimated reading time of an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingStats {
    pub char_count: usize,
    pub minutes: usize,
}
