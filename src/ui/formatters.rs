use chrono::{DateTime, TimeZone};
use humansize::{format_size as human_format_size, BINARY};

/// Format byte counts in human-readable binary units (KiB, MiB, GiB)
pub fn format_size(bytes: u64) -> String {
    human_format_size(bytes, BINARY)
}

/// Format uptime as days, hours and minutes
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86400;
    let hours = (secs % 86400) / 3600;
    let minutes = (secs % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Format a timestamp as YYYY-MM-DD HH:MM:SS
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Layout shared by the logger and the fatal error line:
/// `YYYY-MM-DD HH:MM:SS - moodfetch - LEVEL - message`
pub fn format_log_line<Tz: TimeZone>(
    at: &DateTime<Tz>,
    level: log::Level,
    message: &str,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{} - moodfetch - {} - {}", format_timestamp(at), level, message)
}
