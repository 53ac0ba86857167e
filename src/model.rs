//! Value types describing one reading of the monitored resources.

/// Virtual memory usage at one sampling instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MemoryUsage {
    /// Total physical memory in GB.
    pub total_gb: f64,
    /// Memory in use in GB.
    pub used_gb: f64,
    /// Used fraction as a 0-100 percentage.
    pub percent: f64,
}

/// Root filesystem usage at one sampling instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiskUsage {
    /// Total capacity in GB.
    pub total_gb: f64,
    /// Space in use in GB.
    pub used_gb: f64,
    /// Used fraction as a 0-100 percentage.
    pub percent: f64,
}

/// Cumulative network I/O counters since boot, summed over all interfaces.
///
/// These are monotonically non-decreasing totals, not rates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NetworkTotals {
    /// Total bytes sent, in MB.
    pub sent_mb: f64,
    /// Total bytes received, in MB.
    pub recv_mb: f64,
}

/// One immutable reading of all monitored metrics.
///
/// Created fresh on every sampling tick and superseded by the next one.
/// The `Default` value (all zeros) doubles as the fallback snapshot when
/// the underlying metrics source fails.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricsSnapshot {
    /// System-wide CPU utilization as a 0-100 percentage.
    pub cpu_percent: f64,
    pub memory: MemoryUsage,
    pub disk: DiskUsage,
    pub network: NetworkTotals,
}
