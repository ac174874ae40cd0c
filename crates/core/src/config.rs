//! Runtime configuration for both components.
//!
//! Every section deserializes with `#[serde(default)]`, so a page only has to
//! pass the keys it overrides:
//!
//! ```json
//! { "search": { "indexUrl": "/blog/search.json" }, "stats": { "charsPerMinute": 500 } }
//! ```

use crate::error::KijiError;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KijiConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub navigator: NavigatorConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

impl KijiConfig {
    pub fn from_json(json: &str) -> Result<Self, KijiError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would make a component misbehave at runtime.
    pub fn validate(&self) -> Result<(), KijiError> {
        if self.stats.chars_per_minute == 0 {
            return Err(KijiError::Config("stats.charsPerMinute must be at least 1".into()));
        }
        if self.search.min_query_chars == 0 {
            return Err(KijiError::Config("search.minQueryChars must be at least 1".into()));
        }
        if self.navigator.indent_step_px < 0.0 {
            return Err(KijiError::Config("navigator.indentStepPx must not be negative".into()));
        }
        Ok(())
    }
}

/// Quick-search widget settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// URL of the static post index.
    pub index_url: String,
    /// Path of the full search page.
    pub search_page: String,
    /// Query-string parameter carrying the search text.
    pub query_param: String,
    /// Shortest trimmed query (in characters) that triggers a quick search.
    pub min_query_chars: usize,
    pub max_results: usize,
    /// Content preview length, in characters, before `...` is appended.
    pub preview_chars: usize,
    pub input_id: String,
    pub panel_id: String,
    /// Clicks outside the closest ancestor matching this selector dismiss the panel.
    pub container_selector: String,
    pub labels: SearchLabels,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_url: "/search.json".into(),
            search_page: "/search/".into(),
            query_param: "q".into(),
            min_query_chars: 3,
            max_results: 3,
            preview_chars: 50,
            input_id: "sidebar-search-input".into(),
            panel_id: "quick-search-results".into(),
            container_selector: ".search-container".into(),
            labels: SearchLabels::default(),
        }
    }
}

/// Text shown in the quick-result panel.
///
/// `results_header` may contain `{count}`, replaced with the number of results.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchLabels {
    pub results_header: String,
    pub no_results: String,
    pub view_all: String,
}

impl Default for SearchLabels {
    fn default() -> Self {
        Self {
            results_header: "Results ({count})".into(),
            no_results: "No matching posts".into(),
            view_all: "View all results".into(),
        }
    }
}

/// Outline and scroll-tracking settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigatorConfig {
    /// Selector for the article body. The first match wins.
    pub article_selector: String,
    pub heading_selector: String,
    pub container_id: String,
    /// Scrollable element wrapping the outline; optional on the page.
    pub nav_id: String,
    /// Height of the fixed page header kept clear when jumping to a heading.
    pub header_offset: f64,
    /// A heading becomes active once its top edge is at or above this offset.
    pub activation_offset: f64,
    /// Distance from the document end at which the last heading is forced active.
    pub bottom_margin: f64,
    pub indent_step_px: f64,
    pub no_headings_label: String,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            article_selector: ".post .post-content, .post .e-content".into(),
            heading_selector: "h1, h2, h3".into(),
            container_id: "toc-container".into(),
            nav_id: "toc-nav".into(),
            header_offset: 80.0,
            activation_offset: 100.0,
            bottom_margin: 100.0,
            indent_step_px: 15.0,
            no_headings_label: "No headings".into(),
        }
    }
}

/// Reading statistics settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsConfig {
    pub chars_per_minute: usize,
    pub char_count_id: String,
    pub read_time_id: String,
    pub char_unit: String,
    pub minute_unit: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            chars_per_minute: 600,
            char_count_id: "char-count".into(),
            read_time_id: "read-time".into(),
            char_unit: " chars".into(),
            minute_unit: " min".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KijiConfig::default();
        assert_eq!(config.search.min_query_chars, 3);
        assert_eq!(config.search.max_results, 3);
        assert_eq!(config.search.preview_chars, 50);
        assert_eq!(config.navigator.header_offset, 80.0);
        assert_eq!(config.navigator.indent_step_px, 15.0);
        assert_eq!(config.stats.chars_per_minute, 600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config = KijiConfig::from_json(
            r#"{"search": {"indexUrl": "/blog/search.json"}, "stats": {"charsPerMinute": 500}}"#,
        )
        .unwrap();
        assert_eq!(config.search.index_url, "/blog/search.json");
        assert_eq!(config.search.max_results, 3);
        assert_eq!(config.stats.chars_per_minute, 500);
        assert_eq!(config.navigator, NavigatorConfig::default());
    }

    #[test]
    fn test_nested_label_override() {
        let json = r#"{"search": {"labels": {"noResults": "Nothing here"}}}"#;
        let config = KijiConfig::from_json(json).unwrap();
        assert_eq!(config.search.labels.no_results, "Nothing here");
        assert_eq!(config.search.labels.view_all, "View all results");
    }

    #[test]
    fn test_zero_reading_speed_rejected() {
        let result = KijiConfig::from_json(r#"{"stats": {"charsPerMinute": 0}}"#);
        assert!(matches!(result, Err(KijiError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(KijiConfig::from_json("{"), Err(KijiError::Json(_))));
    }
}
