//! Utility functions for inkpot

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Current time as Unix seconds.
pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Formats Unix timestamp as human readable relative time
///
/// Converts Unix epoch seconds to relative time strings like "5 min ago"
/// or "2 weeks ago". Future timestamps are treated as "just now".
///
/// # Arguments
///
/// * `seconds`: Unix timestamp in seconds since epoch
///
/// # Returns
///
/// Human readable relative time string
pub fn format_timestamp(seconds: i64) -> String {
    let timestamp = UNIX_EPOCH + Duration::from_secs(seconds.max(0) as u64);
    let now = SystemTime::now();

    // Handle future timestamps gracefully by treating as present
    let duration = now.duration_since(timestamp).unwrap_or(Duration::ZERO);
    let secs = duration.as_secs();
    let minutes = secs / 60;
    let hours = secs / 3600;
    let days = secs / 86400;

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hr ago", hours)
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}
