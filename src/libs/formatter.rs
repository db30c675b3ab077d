//! Formatting helpers for durations and money amounts.
//!
//! All time values shown to the user go through these functions so the
//! countdown display, stats tables, and exports agree on formatting.

use chrono::Duration;

/// Formats a duration as "HH:MM" for reports and stats tables.
/// Negative durations are clamped to zero.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a second count as "MM:SS" for the live countdown. Sessions can
/// exceed an hour, so minutes are not wrapped.
pub fn format_countdown(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Formats a signed money amount with a leading sign, e.g. "+120.50".
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}
