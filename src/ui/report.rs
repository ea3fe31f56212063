//! Text report for a classified reading.

use chrono::{DateTime, Local};
use colored::*;

use super::formatters::{format_size, format_timestamp, format_uptime};
use crate::core::mood::{MetricStatus, Mood, MoodResult};

const HEADER_WIDTH: usize = 50;

/// How much of the report to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Mood, emoji, ascii art and timestamp
    #[default]
    Default,
    /// Default plus the itemized metrics
    Verbose,
    /// Mood and emoji only
    Minimal,
}

fn paint(text: &str, mood: Mood) -> ColoredString {
    match mood {
        Mood::Excellent => text.bright_green(),
        Mood::Good => text.cyan(),
        Mood::Fair => text.yellow(),
        Mood::Poor => text.bright_red(),
        Mood::Critical => text.white().on_red().bold(),
    }
}

/// Render the report. The timestamp is passed in so output is reproducible.
pub fn render(result: &MoodResult, mode: DisplayMode, at: &DateTime<Local>) -> String {
    let status = format!("{} {}", result.mood.label(), result.emoji);

    if mode == DisplayMode::Minimal {
        return paint(&status, result.mood).to_string();
    }

    let rule = "=".repeat(HEADER_WIDTH);
    let mut lines = vec![
        rule.clone(),
        format!("|| {} ||", paint("SYSTEM MOOD DIAGNOSTIC", result.mood)),
        rule.clone(),
        String::new(),
        paint(&format!("Status: {}", status), result.mood).to_string(),
        String::new(),
        "System Visualization:".bold().to_string(),
        result.ascii_art.to_string(),
        String::new(),
    ];

    if mode == DisplayMode::Verbose {
        lines.push("🔍 Detailed System Metrics:".bold().to_string());
        lines.extend(metric_lines(result));
        lines.push(String::new());
    }

    lines.push(rule.clone());
    lines.push(format!(
        "|| Analyzed at: {} ||",
        format_timestamp(at).as_str().dimmed()
    ));
    lines.push(rule);

    lines.join("\n")
}

fn metric_line(label: &str, percent: f32, detail: Option<String>, mood: Mood) -> String {
    let status = MetricStatus::from_percent(percent);
    let value = paint(&format!("{:.1}%", percent), mood);

    match detail {
        Some(detail) => format!(
            "{} {}: {} {}",
            status.indicator(),
            label,
            value,
            detail.as_str().dimmed()
        ),
        None => format!("{} {}: {}", status.indicator(), label, value),
    }
}

fn metric_lines(result: &MoodResult) -> Vec<String> {
    let m = &result.metrics;

    let memory_detail = (m.memory_total_bytes > 0).then(|| {
        format!(
            "({} available of {})",
            format_size(m.memory_available_bytes),
            format_size(m.memory_total_bytes)
        )
    });

    let disk_label = if m.disk_mount_point.is_empty() {
        "Disk Usage".to_string()
    } else {
        format!("Disk Usage ({})", m.disk_mount_point)
    };
    let disk_detail = (m.disk_total_bytes > 0).then(|| {
        format!(
            "({} free of {})",
            format_size(m.disk_free_bytes),
            format_size(m.disk_total_bytes)
        )
    });

    vec![
        metric_line("CPU Usage", m.cpu_percent, None, result.mood),
        metric_line("Memory Usage", m.memory_percent, memory_detail, result.mood),
        metric_line(&disk_label, m.disk_percent, disk_detail, result.mood),
        format!("⏱️ Uptime: {}", format_uptime(m.uptime_seconds)),
    ]
}
