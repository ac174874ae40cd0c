//! Character count and reading-time estimate.

use crate::config::StatsConfig;
use kiji_types::ReadingStats;

/// Counts the visible characters of rendered text. Whitespace is not counted.
pub fn count_chars(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Whole minutes needed to read `char_count` characters, rounded up.
pub fn reading_minutes(char_count: usize, chars_per_minute: usize) -> usize {
    char_count.div_ceil(chars_per_minute.max(1))
}

pub fn reading_stats(text: &str, chars_per_minute: usize) -> ReadingStats {
    let char_count = count_chars(text);
    ReadingStats {
        char_count,
        minutes: reading_minutes(char_count, chars_per_minute),
    }
}

/// Groups digits in groups of three: `12345` → `12,345`.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Display strings for the character count and reading time fields.
pub fn display(stats: &ReadingStats, config: &StatsConfig) -> (String, String) {
    (
        format!("{}{}", group_thousands(stats.char_count), config.char_unit),
        format!("{}{}", stats.minutes, config.minute_unit),
    )
}
