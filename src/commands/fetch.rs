//! The one command moodfetch has: collect, classify, print.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::Local;
use log::debug;

use crate::core::{classify, MetricsSource};
use crate::error::MoodfetchError;
use crate::ui::{format_log_line, render, DisplayMode};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Collect one reading, classify it and write the report to `out`
pub fn execute(
    mode: DisplayMode,
    source: &mut dyn MetricsSource,
    out: &mut dyn Write,
) -> Result<()> {
    let reading = source
        .collect()
        .context("Unable to collect system metrics")?;

    let result = classify(reading);
    debug!("System mood: {}", result.mood);

    // Rendered in full before anything is written
    let report = render(&result, mode, &Local::now());
    writeln!(out, "{}", report).context("Failed to write report")?;
    out.flush().context("Failed to write report")?;

    Ok(())
}

/// Run the command and map the outcome to a process exit code.
/// Failures are reported as a single line on `err`; `out` stays untouched.
pub fn run(
    mode: DisplayMode,
    source: &mut dyn MetricsSource,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32 {
    match execute(mode, source, out) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let line = format_log_line(&Local::now(), log::Level::Error, &failure_message(&e));
            let _ = writeln!(err, "{}", line);
            EXIT_FAILURE
        }
    }
}

/// Prefix the error chain according to its kind
pub fn failure_message(e: &anyhow::Error) -> String {
    let from_collection = e
        .downcast_ref::<MoodfetchError>()
        .is_some_and(MoodfetchError::is_collection);

    if from_collection {
        format!("System performance analysis failed: {:#}", e)
    } else {
        format!("Unexpected error in moodfetch: {:#}", e)
    }
}
