use super::full_search_url;
use super::pattern::{Highlighted, QueryPattern, truncate_chars};
use crate::config::{SearchConfig, SearchLabels};
use crate::html;
use kiji_types::{PostRecord, PostUrl};

/// Keeps the posts whose title or content contains the query, in index
/// order, stopping after `limit` matches.
pub fn filter_posts<'a>(
    posts: &'a [PostRecord],
    pattern: &QueryPattern,
    limit: usize,
) -> Vec<&'a PostRecord> {
    posts
        .iter()
        .filter(|post| pattern.matches_post(post))
        .take(limit)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickResultItem {
    pub url: PostUrl,
    pub title: Highlighted,
    pub preview: Highlighted,
}

/// What the quick-result panel shows for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickResults {
    pub query: String,
    pub items: Vec<QuickResultItem>,
    pub full_search_url: String,
}

impl QuickResults {
    pub fn build(posts: &[PostRecord], pattern: &QueryPattern, config: &SearchConfig) -> Self {
        let items = filter_posts(posts, pattern, config.max_results)
            .into_iter()
            .map(|post| QuickResultItem {
                url: post.url.clone(),
                title: pattern.highlight(&post.title),
                preview: pattern.highlight(&truncate_chars(&post.content, config.preview_chars)),
            })
            .collect();

        Self {
            query: pattern.as_str().to_string(),
            items,
            full_search_url: full_search_url(config, pattern.as_str()),
        }
    }

    /// No results for `query`, still linking to the full search page.
    pub fn empty(query: &str, config: &SearchConfig) -> Self {
        let query = query.trim();
        Self {
            query: query.to_string(),
            items: Vec::new(),
            full_search_url: full_search_url(config, query),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Panel markup. Every piece of index text is escaped.
    pub fn to_html(&self, labels: &SearchLabels) -> String {
        if self.items.is_empty() {
            return format!(
                r#"<p class="no-quick-results">{}</p>"#,
                html::escape(&labels.no_results)
            );
        }

        let header = labels
            .results_header
            .replace("{count}", &self.items.len().to_string());
        let mut out = format!(
            r#"<div class="quick-results-header">{}</div>"#,
            html::escape(&header)
        );
        for item in &self.items {
            out.push_str(&format!(
                r#"<div class="quick-result-item"><a href="{}" class="quick-result-link"><h4>{}</h4><p>{}</p></a></div>"#,
                html::escape(item.url.as_str()),
                item.title.to_html(),
                item.preview.to_html(),
            ));
        }
        out.push_str(&format!(
            r#"<div class="quick-results-footer"><a href="{}">{}</a></div>"#,
            html::escape(&self.full_search_url),
            html::escape(&labels.view_all),
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts() -> Vec<PostRecord> {
        vec![
            PostRecord::new("Hello World", "greetings", "/hello/"),
            PostRecord::new("World Cup", "football", "/cup/"),
            PostRecord::new("Other", "unrelated", "/other/"),
        ]
    }

    #[test]
    fn test_filter_keeps_index_order() {
        let posts = posts();
        let pattern = QueryPattern::new("world").unwrap();
        let matched = filter_posts(&posts, &pattern, 3);
        let titles: Vec<_> = matched.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Hello World", "World Cup"]);
    }

    #[test]
    fn test_filter_matches_content() {
        let posts = posts();
        let pattern = QueryPattern::new("FOOT").unwrap();
        let matched = filter_posts(&posts, &pattern, 3);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].url.as_str(), "/cup/");
    }

    #[test]
    fn test_result_count_is_capped() {
        let posts: Vec<_> = (0..10)
            .map(|i| PostRecord::new(format!("Rust post {i}"), "", format!("/{i}/")))
            .collect();
        let pattern = QueryPattern::new("rust").unwrap();
        let results = QuickResults::build(&posts, &pattern, &SearchConfig::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results.items[2].url.as_str(), "/2/");
    }

    #[test]
    fn test_preview_is_truncated_before_highlighting() {
        let content = format!("{}needle", "x".repeat(60));
        let posts = vec![PostRecord::new("Title", content, "/p/")];
        let pattern = QueryPattern::new("needle").unwrap();
        let results = QuickResults::build(&posts, &pattern, &SearchConfig::default());
        assert_eq!(results.len(), 1);
        let preview = results.items[0].preview.plain_text();
        assert_eq!(preview, format!("{}...", "x".repeat(50)));
        assert_eq!(results.items[0].preview.match_count(), 0);
    }

    #[test]
    fn test_empty_index_renders_no_results() {
        let pattern = QueryPattern::new("anything").unwrap();
        let results = QuickResults::build(&[], &pattern, &SearchConfig::default());
        assert!(results.is_empty());
        assert_eq!(
            results.to_html(&SearchLabels::default()),
            r#"<p class="no-quick-results">No matching posts</p>"#
        );
    }

    #[test]
    fn test_empty_results_keep_full_search_link() {
        let results = QuickResults::empty("  ab ", &SearchConfig::default());
        assert_eq!(results.query, "ab");
        assert!(results.is_empty());
        assert_eq!(results.full_search_url, "/search/?q=ab");
    }

    #[test]
    fn test_html_layout() {
        let posts = posts();
        let pattern = QueryPattern::new("cup").unwrap();
        let html = QuickResults::build(&posts, &pattern, &SearchConfig::default())
            .to_html(&SearchLabels::default());

        assert!(html.starts_with(r#"<div class="quick-results-header">Results (1)</div>"#));
        assert!(html.contains(
            r#"<a href="/cup/" class="quick-result-link"><h4>World <mark>Cup</mark></h4><p>football</p></a>"#
        ));
        assert!(html.ends_with(
            r#"<div class="quick-results-footer"><a href="/search/?q=cup">View all results</a></div>"#
        ));
    }

    #[test]
    fn test_index_markup_is_escaped() {
        let posts = vec![PostRecord::new(
            "<img src=x onerror=alert(1)> tips",
            "",
            "/p/\"onmouseover=\"x",
        )];
        let pattern = QueryPattern::new("tips").unwrap();
        let html = QuickResults::build(&posts, &pattern, &SearchConfig::default())
            .to_html(&SearchLabels::default());
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt; <mark>tips</mark>"));
        assert!(html.contains(r#"href="/p/&quot;onmouseover=&quot;x""#));
    }
}
