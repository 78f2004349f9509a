use anyhow::{anyhow, Result};
use std::time::Duration;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Format a duration as a short human-readable string
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}

/// Compact citation count for display: 950, 1.2k, 3.4M
pub fn format_citation_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Truncate text to `max_chars` characters, appending "..." when cut
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Option<Date> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Resolve the reference date: an explicit `YYYY-MM-DD` or today (UTC)
pub fn resolve_now(value: Option<&str>) -> Result<Date> {
    match value {
        Some(v) => parse_date(v).ok_or_else(|| anyhow!("Invalid date '{}', expected YYYY-MM-DD", v)),
        None => Ok(OffsetDateTime::now_utc().date()),
    }
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
