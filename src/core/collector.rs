//! Metrics collection from the host operating system.
//!
//! The pipeline only talks to [`MetricsSource`]; [`SysinfoSource`] is the
//! implementation backed by the `sysinfo` crate.

use std::path::Path;

use log::debug;
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, RefreshKind, System};

use super::metrics::{usage_percent, MetricsReading};
use crate::error::{MoodfetchError, Result};

/// Trait for anything that can produce a [`MetricsReading`]
pub trait MetricsSource {
    /// Take one reading. Failure is terminal, callers do not retry.
    fn collect(&mut self) -> Result<MetricsReading>;
}

/// Space figures for one mounted filesystem
#[derive(Debug, Clone, PartialEq)]
pub struct DiskUsage {
    pub mount_point: String,
    pub total_bytes: u64,
    pub available_bytes: u64,
}

/// Reads CPU, memory, disk and uptime through `sysinfo`
pub struct SysinfoSource {
    system: System,
}

impl SysinfoSource {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::nothing().with_ram());

        Self {
            system: System::new_with_specifics(refresh_kind),
        }
    }

    fn collect_cpu(&mut self) -> Result<f32> {
        // CPU usage is a delta between two refreshes
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        self.system.refresh_cpu_usage();

        if self.system.cpus().is_empty() {
            return Err(MoodfetchError::collection("no CPU information available"));
        }

        Ok(self.system.global_cpu_usage())
    }

    fn collect_memory(&mut self) -> Result<(f32, u64, u64)> {
        self.system.refresh_memory();

        let total = self.system.total_memory();
        if total == 0 {
            return Err(MoodfetchError::collection("total memory reported as zero"));
        }

        let used = self.system.used_memory();
        Ok((
            usage_percent(used, total),
            total,
            self.system.available_memory(),
        ))
    }

    fn collect_disk(&self) -> Result<DiskUsage> {
        let disks = Disks::new_with_refreshed_list();
        let usages: Vec<DiskUsage> = disks
            .list()
            .iter()
            .map(|disk| DiskUsage {
                mount_point: disk.mount_point().to_string_lossy().to_string(),
                total_bytes: disk.total_space(),
                available_bytes: disk.available_space(),
            })
            .collect();

        pick_primary_disk(&usages)
            .cloned()
            .ok_or_else(|| MoodfetchError::collection("no mounted disks found"))
    }
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSource for SysinfoSource {
    fn collect(&mut self) -> Result<MetricsReading> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(MoodfetchError::collection(
                "this platform is not supported by the metrics source",
            ));
        }

        let cpu_percent = self.collect_cpu()?;
        let (memory_percent, memory_total_bytes, memory_available_bytes) =
            self.collect_memory()?;
        let disk = self.collect_disk()?;
        let used = disk.total_bytes.saturating_sub(disk.available_bytes);

        let reading = MetricsReading {
            cpu_percent,
            memory_percent,
            disk_percent: usage_percent(used, disk.total_bytes),
            uptime_seconds: System::uptime(),
            memory_total_bytes,
            memory_available_bytes,
            disk_total_bytes: disk.total_bytes,
            disk_free_bytes: disk.available_bytes,
            disk_mount_point: disk.mount_point,
        };

        debug!(
            "Collected cpu={:.1}% memory={:.1}% disk={:.1}% ({}) uptime={}s",
            reading.cpu_percent,
            reading.memory_percent,
            reading.disk_percent,
            reading.disk_mount_point,
            reading.uptime_seconds
        );

        reading.validate()?;
        Ok(reading)
    }
}

/// Collect one reading from the host
pub fn collect() -> Result<MetricsReading> {
    SysinfoSource::new().collect()
}

/// The root filesystem if mounted, otherwise the largest disk.
/// Zero-sized mounts (pseudo filesystems) are skipped.
pub fn pick_primary_disk(disks: &[DiskUsage]) -> Option<&DiskUsage> {
    let sized = disks.iter().filter(|d| d.total_bytes > 0);

    sized
        .clone()
        .find(|d| Path::new(&d.mount_point) == Path::new("/"))
        .or_else(|| sized.max_by_key(|d| d.total_bytes))
}
