//! Display module for terminal output and formatting

pub mod formatter;
pub mod terminal;

// Re-export commonly used items
pub use formatter::{format_banner, format_labeled, format_timestamp};
pub use terminal::Terminal;
