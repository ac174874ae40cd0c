use crate::html;
use kiji_types::{AnchorId, HeadingEntry, HeadingLevel};

/// A heading as read from the article, before anchors are settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingSource {
    pub level: HeadingLevel,
    pub text: String,
    /// The element's existing `id`, if any.
    pub id: Option<String>,
}

impl HeadingSource {
    pub fn new(level: HeadingLevel, text: impl Into<String>, id: Option<&str>) -> Self {
        Self {
            level,
            text: text.into(),
            id: id.map(str::to_string),
        }
    }
}

/// The article outline: one entry per heading, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    entries: Vec<HeadingEntry>,
    indent_step_px: f64,
}

impl Outline {
    /// Settles an anchor for every heading. Existing non-empty ids are kept,
    /// the rest become `heading-<index>`.
    pub fn build(sources: &[HeadingSource], indent_step_px: f64) -> Self {
        let entries = sources
            .iter()
            .enumerate()
            .map(|(index, source)| {
                let existing = source.id.as_deref().filter(|id| !id.is_empty());
                HeadingEntry {
                    level: source.level,
                    text: source.text.trim().to_string(),
                    anchor_id: existing
                        .map_or_else(|| AnchorId::synthesized(index), AnchorId::from),
                    index,
                    anchor_assigned: existing.is_none(),
                }
            })
            .collect();

        Self {
            entries,
            indent_step_px,
        }
    }

    pub fn entries(&self) -> &[HeadingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self, anchor: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.anchor_id.as_str() == anchor)
    }

    /// Left padding of an entry: one step per level below `h1`.
    pub fn indent_px(&self, entry: &HeadingEntry) -> f64 {
        f64::from(entry.level.depth()) * self.indent_step_px
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from(r#"<div class="toc-list">"#);
        for entry in &self.entries {
            let level = entry.level.number();
            out.push_str(&format!(
                r##"<div class="toc-item toc-level-{level}" style="padding-left: {}px;"><a href="#{}" class="toc-link" data-level="{level}">{}</a></div>"##,
                self.indent_px(entry),
                html::escape(entry.anchor_id.as_str()),
                html::escape(&entry.text),
            ));
        }
        out.push_str("</div>");
        out
    }

    /// Markup shown in place of the outline when the article has no headings.
    pub fn placeholder_html(label: &str) -> String {
        format!(r#"<p class="no-headings">{}</p>"#, html::escape(label))
    }
}
