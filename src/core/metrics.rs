use crate::error::{MoodfetchError, Result};

/// A single snapshot of the host, taken once per invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsReading {
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub disk_percent: f32, // Primary mount
    pub uptime_seconds: u64,
    pub memory_total_bytes: u64,
    pub memory_available_bytes: u64,
    pub disk_total_bytes: u64,
    pub disk_free_bytes: u64,
    pub disk_mount_point: String,
}

impl MetricsReading {
    /// Build a reading from the three percentages alone.
    pub fn from_percentages(cpu: f32, memory: f32, disk: f32, uptime_seconds: u64) -> Self {
        Self {
            cpu_percent: cpu,
            memory_percent: memory,
            disk_percent: disk,
            uptime_seconds,
            ..Default::default()
        }
    }

    /// Check that every percentage is a finite number in [0, 100].
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("CPU", self.cpu_percent),
            ("memory", self.memory_percent),
            ("disk", self.disk_percent),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(MoodfetchError::collection(format!(
                    "{} usage out of range: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Percentage of `part` over `total`, 0 when the total is unknown
pub fn usage_percent(part: u64, total: u64) -> f32 {
    if total > 0 {
        (part as f32 / total as f32) * 100.0
    } else {
        0.0
    }
}
