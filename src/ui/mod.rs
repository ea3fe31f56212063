// UI and formatting module

pub mod formatters;
pub mod report;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_log_line, format_size, format_timestamp, format_uptime};
pub use report::{render, DisplayMode};
