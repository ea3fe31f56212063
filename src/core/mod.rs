//! Metrics collection and mood classification.

pub mod collector;
pub mod metrics;
pub mod mood;

pub use collector::{collect, MetricsSource, SysinfoSource};
pub use metrics::MetricsReading;
pub use mood::{classify, severity_score, MetricStatus, Mood, MoodResult};
