// Moodfetch Library - Public API

// Re-export error types
pub mod error;
pub use error::{MoodfetchError, Result};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::{classify, MetricsReading, MetricsSource, Mood, MoodResult, SysinfoSource};

use std::io::Write;

// Initialize logging. Warn by default, RUST_LOG overrides.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format(|buf, record| {
            let line = ui::format_log_line(
                &chrono::Local::now(),
                record.level(),
                &record.args().to_string(),
            );
            writeln!(buf, "{}", line)
        })
        .init();
}
