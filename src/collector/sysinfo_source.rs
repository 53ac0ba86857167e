//! Real metrics source backed by the `sysinfo` crate.

use std::path::Path;
use std::thread;
use std::time::Duration;

use sysinfo::{Disks, Networks, System};

use crate::model::{DiskUsage, MemoryUsage, MetricsSnapshot, NetworkTotals};

use super::{MetricSource, SourceError};

const GB: f64 = 1024.0 * 1024.0 * 1024.0;
const MB: f64 = 1024.0 * 1024.0;

/// Interval over which CPU utilization is measured on every read.
const CPU_MEASURE_INTERVAL: Duration = Duration::from_millis(100);

/// Reads host metrics through `sysinfo`.
///
/// The CPU reading blocks for [`CPU_MEASURE_INTERVAL`] (or sysinfo's
/// minimum update interval, whichever is longer) to measure utilization
/// over an interval rather than an instant.
pub struct SysinfoSource {
    system: System,
}

impl SysinfoSource {
    /// Creates a new source. The first CPU reading after construction is
    /// measured against the baseline taken here.
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu_usage();
        system.refresh_memory();
        Self { system }
    }

    fn cpu_percent(&mut self) -> Result<f64, SourceError> {
        let interval = CPU_MEASURE_INTERVAL.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        thread::sleep(interval);
        self.system.refresh_cpu_usage();
        let percent = self.system.global_cpu_usage() as f64;
        if percent.is_finite() {
            Ok(percent)
        } else {
            Err(SourceError::Cpu("utilization reading is not finite".to_string()))
        }
    }

    fn memory(&mut self) -> Result<MemoryUsage, SourceError> {
        self.system.refresh_memory();
        let total = self.system.total_memory();
        if total == 0 {
            return Err(SourceError::Memory(
                "platform reported zero total memory".to_string(),
            ));
        }
        let used = self.system.used_memory();
        Ok(MemoryUsage {
            total_gb: total as f64 / GB,
            used_gb: used as f64 / GB,
            percent: used as f64 / total as f64 * 100.0,
        })
    }

    fn disk(&self) -> Result<DiskUsage, SourceError> {
        let disks = Disks::new_with_refreshed_list();
        // Prefer the root filesystem; fall back to the first listed disk
        // on platforms where "/" is not a mount point.
        let disk = disks
            .list()
            .iter()
            .find(|d| d.mount_point() == Path::new("/"))
            .or_else(|| disks.list().first())
            .ok_or_else(|| SourceError::Disk("no mounted filesystems reported".to_string()))?;

        let total = disk.total_space();
        if total == 0 {
            return Err(SourceError::Disk(
                "root filesystem reported zero capacity".to_string(),
            ));
        }
        let used = total.saturating_sub(disk.available_space());
        Ok(DiskUsage {
            total_gb: total as f64 / GB,
            used_gb: used as f64 / GB,
            percent: used as f64 / total as f64 * 100.0,
        })
    }

    fn network(&self) -> Result<NetworkTotals, SourceError> {
        let networks = Networks::new_with_refreshed_list();
        let mut sent: u64 = 0;
        let mut recv: u64 = 0;
        for (_name, data) in &networks {
            sent = sent.saturating_add(data.total_transmitted());
            recv = recv.saturating_add(data.total_received());
        }
        Ok(NetworkTotals {
            sent_mb: sent as f64 / MB,
            recv_mb: recv as f64 / MB,
        })
    }
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for SysinfoSource {
    fn read(&mut self) -> Result<MetricsSnapshot, SourceError> {
        Ok(MetricsSnapshot {
            cpu_percent: self.cpu_percent()?,
            memory: self.memory()?,
            disk: self.disk()?,
            network: self.network()?,
        })
    }
}
