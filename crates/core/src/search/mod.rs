//! Quick search over the static post index.
//!
//! - [`pattern`]: literal case-insensitive matching, highlighting, truncation
//! - [`results`]: filtering and the quick-result panel markup
//! - [`widget`]: the stateful widget driven by input events

pub mod pattern;
pub mod results;
pub mod widget;

pub use pattern::{Highlighted, QueryPattern, Segment, truncate_chars};
pub use results::{QuickResultItem, QuickResults, filter_posts};
pub use widget::{Completion, QuickSearch, SearchTicket};

use crate::config::SearchConfig;
use crate::error::KijiError;
use kiji_traits::IndexSource;

/// URL of the full search page for `query`.
pub fn full_search_url(config: &SearchConfig, query: &str) -> String {
    let separator = if config.search_page.contains('?') { '&' } else { '?' };
    format!(
        "{}{}{}={}",
        config.search_page,
        separator,
        config.query_param,
        urlencoding::encode(query)
    )
}

/// Whether `query` is long enough to search for, counted in characters after
/// trimming.
pub fn meets_threshold(config: &SearchConfig, query: &str) -> bool {
    query.trim().chars().count() >= config.min_query_chars
}

/// Loads the index from `source` and computes the quick results for `query`.
///
/// The query is trimmed first; the length threshold is not applied here.
pub async fn search<I: IndexSource>(
    source: &I,
    query: &str,
    config: &SearchConfig,
) -> Result<QuickResults, KijiError> {
    let pattern = QueryPattern::new(query.trim())?;
    let posts = source.fetch_index().await?;
    log::debug!(
        "Loaded {} posts from {} ({})",
        posts.len(),
        source.location(),
        source.name()
    );
    Ok(QuickResults::build(&posts, &pattern, config))
}
