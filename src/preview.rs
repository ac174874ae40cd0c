//! Plain-text rendering of what the page components would show.

use crate::error::CliError;
use kiji_core::search::Highlighted;
use kiji_core::{KijiConfig, QuickResults, StatsConfig, stats};
use kiji_types::ReadingStats;
use std::fmt::Write;
use std::path::Path;

/// Loads a config file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<KijiConfig, CliError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(KijiConfig::from_json(&json)?)
        }
        None => Ok(KijiConfig::default()),
    }
}

/// Matches shown as `[match]`.
pub fn bracket_matches(text: &Highlighted) -> String {
    text.segments
        .iter()
        .map(|s| {
            if s.marked {
                format!("[{}]", s.text)
            } else {
                s.text.clone()
            }
        })
        .collect()
}

pub fn render_results(results: &QuickResults) -> String {
    let mut out = String::new();
    if results.is_empty() {
        let _ = writeln!(out, "No matching posts for \"{}\"", results.query);
    } else {
        let _ = writeln!(out, "{} result(s) for \"{}\"", results.len(), results.query);
        for (i, item) in results.items.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, bracket_matches(&item.title));
            let _ = writeln!(out, "   {}", item.url);
            let _ = writeln!(out, "   {}", bracket_matches(&item.preview));
        }
    }
    let _ = writeln!(out, "Full search: {}", results.full_search_url);
    out
}

pub fn render_stats(reading: &ReadingStats, config: &StatsConfig) -> String {
    let (chars, minutes) = stats::display(reading, config);
    format!("Characters: {chars}\nReading time: {minutes}\n")
}
