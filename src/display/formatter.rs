use chrono::{DateTime, Utc};

/// Center a title inside a banner of `=` characters (e.g. "=== Title ===")
pub fn format_banner(title: &str, width: usize) -> String {
    format!("{:=^width$}", title)
}

/// Format a UTC timestamp for the header line
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a labeled value with a fixed-width label column
pub fn format_labeled(label: &str, value: &str) -> String {
    format!("{:<12} {}", format!("{}:", label), value)
}
