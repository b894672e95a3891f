/// Utilities for date and time formatting
use chrono::{DateTime, Utc};

/// Format timestamp as DD.MM.YYYY HH:MM
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024 14:02"
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

/// Relative description for recent timestamps ("just now", "5 min ago"),
/// falling back to the full date after a day
pub fn format_relative(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let secs = (*now - *dt).num_seconds();
    match secs {
        s if s < 60 => "just now".to_string(),
        s if s < 3_600 => format!("{} min ago", s / 60),
        s if s < 86_400 => format!("{} h ago", s / 3_600),
        _ => format_datetime(dt),
    }
}
