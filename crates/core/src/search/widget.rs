//! The quick-search widget state machine.
//!
//! Index loads are asynchronous and may finish out of order. Every search is
//! issued a [`SearchTicket`] with an increasing sequence number, and a
//! completion is only applied while its ticket is still the newest one. Hiding
//! the panel (short query, outside click) retires all outstanding tickets, so
//! a late response cannot bring a dismissed panel back.

use super::{full_search_url, meets_threshold};
use super::pattern::QueryPattern;
use super::results::QuickResults;
use crate::config::SearchConfig;
use kiji_traits::{IndexError, SearchSurface};
use kiji_types::PostRecord;

/// Permission to apply the results of one quick search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The trimmed query this search was started for.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// What happened to a finished index load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The panel now shows this many results.
    Applied { results: usize },
    /// A newer search or a dismissal superseded the ticket; nothing changed.
    Stale,
    /// Loading or matching failed; the panel was left as it was.
    Failed,
}

#[derive(Debug)]
pub struct QuickSearch {
    config: SearchConfig,
    issued: u64,
    applied: u64,
    retired: u64,
}

impl QuickSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            issued: 0,
            applied: 0,
            retired: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Handles an edit of the search input.
    ///
    /// Returns a ticket when the caller should load the index; short queries
    /// hide the panel instead.
    pub fn on_text_change<S: SearchSurface>(
        &mut self,
        raw: &str,
        surface: &mut S,
    ) -> Option<SearchTicket> {
        if !meets_threshold(&self.config, raw) {
            self.dismiss(surface);
            return None;
        }

        self.issued += 1;
        Some(SearchTicket {
            seq: self.issued,
            query: raw.trim().to_string(),
        })
    }

    /// Handles Enter in the search input. Returns the URL navigated to.
    pub fn on_key_enter<S: SearchSurface>(&mut self, raw: &str, surface: &mut S) -> Option<String> {
        let query = raw.trim();
        if query.is_empty() {
            return None;
        }
        let url = full_search_url(&self.config, query);
        log::debug!("Navigating to full search: {url}");
        surface.navigate(&url);
        Some(url)
    }

    /// Handles a click anywhere on the page.
    pub fn on_click<S: SearchSurface>(&mut self, inside_container: bool, surface: &mut S) {
        if !inside_container {
            self.dismiss(surface);
        }
    }

    /// Applies the outcome of the index load started for `ticket`.
    pub fn complete<S: SearchSurface>(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<PostRecord>, IndexError>,
        surface: &mut S,
    ) -> Completion {
        let posts = match outcome {
            Ok(posts) => posts,
            Err(e) => {
                log::warn!("Quick search for '{}' failed: {}", ticket.query, e);
                return Completion::Failed;
            }
        };

        if !self.is_current(ticket) {
            log::debug!(
                "Dropping stale quick search #{} (applied #{}, retired #{})",
                ticket.seq,
                self.applied,
                self.retired
            );
            return Completion::Stale;
        }

        let pattern = match QueryPattern::new(&ticket.query) {
            Ok(pattern) => pattern,
            Err(e) => {
                log::warn!("Quick search for '{}' failed: {}", ticket.query, e);
                return Completion::Failed;
            }
        };

        let results = QuickResults::build(&posts, &pattern, &self.config);
        surface.ensure_panel();
        surface.show_panel(&results.to_html(&self.config.labels));
        self.applied = ticket.seq;
        Completion::Applied {
            results: results.len(),
        }
    }

    /// Whether results for `ticket` would still be applied.
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.seq > self.applied && ticket.seq > self.retired
    }

    fn dismiss<S: SearchSurface>(&mut self, surface: &mut S) {
        self.retired = self.issued;
        surface.hide_panel();
    }
}
