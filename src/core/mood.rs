//! Mood classification.
//!
//! Maps a [`MetricsReading`] onto one of five ordered bands. The severity score
//! is a weighted average of CPU, memory and disk usage, raised to
//! `peak - PEAK_ALLOWANCE` when a single resource runs much hotter than the
//! others. Bands are lower-bound inclusive: a score sitting exactly on a
//! threshold lands in the worse band.

use std::fmt;

use super::metrics::MetricsReading;

/// Weights applied to cpu, memory and disk. They sum to 10 so that integer
/// percentages give exact scores.
const CPU_WEIGHT: f64 = 4.0;
const MEMORY_WEIGHT: f64 = 4.0;
const DISK_WEIGHT: f64 = 2.0;
const WEIGHT_TOTAL: f64 = CPU_WEIGHT + MEMORY_WEIGHT + DISK_WEIGHT;

/// How far the busiest resource may sit above the score before it drags it up
pub const PEAK_ALLOWANCE: f64 = 20.0;

/// Lower bounds of the GOOD, FAIR, POOR and CRITICAL bands
pub const GOOD_THRESHOLD: f64 = 30.0;
pub const FAIR_THRESHOLD: f64 = 50.0;
pub const POOR_THRESHOLD: f64 = 70.0;
pub const CRITICAL_THRESHOLD: f64 = 85.0;

/// Per-metric indicator thresholds (%)
pub const METRIC_WARNING: f32 = 50.0;
pub const METRIC_CRITICAL: f32 = 80.0;

/// System mood, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mood {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Excellent,
        Mood::Good,
        Mood::Fair,
        Mood::Poor,
        Mood::Critical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mood::Excellent => "EXCELLENT",
            Mood::Good => "GOOD",
            Mood::Fair => "FAIR",
            Mood::Poor => "POOR",
            Mood::Critical => "CRITICAL",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Excellent => "😄",
            Mood::Good => "🙂",
            Mood::Fair => "😌",
            Mood::Poor => "😰",
            Mood::Critical => "🥵",
        }
    }

    pub fn ascii_art(self) -> &'static str {
        match self {
            Mood::Excellent => concat!(
                "    \\(^_^)/\n",
                "    Systems go! Feeling awesome!",
            ),
            Mood::Good => concat!(
                "    (^_^)b\n",
                "    Running smooth, plenty of headroom",
            ),
            Mood::Fair => concat!(
                "    (-_-)\n",
                "    Steady, but keeping an eye on things",
            ),
            Mood::Poor => concat!(
                "    (>_<)\n",
                "    Working hard... could use a break",
            ),
            Mood::Critical => concat!(
                "    (x_x)\n",
                "    Overloaded! Cooling required!",
            ),
        }
    }

    /// Band for a severity score
    pub fn from_score(score: f64) -> Self {
        if score >= CRITICAL_THRESHOLD {
            Mood::Critical
        } else if score >= POOR_THRESHOLD {
            Mood::Poor
        } else if score >= FAIR_THRESHOLD {
            Mood::Fair
        } else if score >= GOOD_THRESHOLD {
            Mood::Good
        } else {
            Mood::Excellent
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classified reading, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct MoodResult {
    pub mood: Mood,
    pub emoji: &'static str,
    pub ascii_art: &'static str,
    pub metrics: MetricsReading,
}

/// Indicator for a single percentage metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricStatus {
    Normal,
    Warning,
    Critical,
}

impl MetricStatus {
    pub fn from_percent(percent: f32) -> Self {
        if percent >= METRIC_CRITICAL {
            MetricStatus::Critical
        } else if percent >= METRIC_WARNING {
            MetricStatus::Warning
        } else {
            MetricStatus::Normal
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            MetricStatus::Normal => "✅",
            MetricStatus::Warning => "⚠️",
            MetricStatus::Critical => "🚨",
        }
    }
}

/// Scalar severity in [0, 100]. Uptime is not considered.
pub fn severity_score(reading: &MetricsReading) -> f64 {
    let cpu = reading.cpu_percent as f64;
    let memory = reading.memory_percent as f64;
    let disk = reading.disk_percent as f64;

    let weighted =
        (CPU_WEIGHT * cpu + MEMORY_WEIGHT * memory + DISK_WEIGHT * disk) / WEIGHT_TOTAL;
    let peak = cpu.max(memory).max(disk);

    weighted.max(peak - PEAK_ALLOWANCE)
}

/// Classify a reading. Expects a reading that passed `validate()`.
pub fn classify(reading: MetricsReading) -> MoodResult {
    let mood = Mood::from_score(severity_score(&reading));

    MoodResult {
        mood,
        emoji: mood.emoji(),
        ascii_art: mood.ascii_art(),
        metrics: reading,
    }
}
