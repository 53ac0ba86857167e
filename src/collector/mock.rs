//! Mock metrics source for testing without real host counters.

use crate::model::{DiskUsage, MemoryUsage, MetricsSnapshot, NetworkTotals};

use super::{MetricSource, SourceError};

/// Source that returns a fixed snapshot on every read.
#[derive(Debug, Clone)]
pub struct MockSource {
    snapshot: MetricsSnapshot,
}

impl MockSource {
    /// Creates a source that always returns the given snapshot.
    pub fn new(snapshot: MetricsSnapshot) -> Self {
        Self { snapshot }
    }

    /// A moderately loaded 8 GB machine. Values chosen so that derived
    /// output (bar fills, formatted lines) is easy to assert on.
    pub fn typical_system() -> Self {
        Self::new(MetricsSnapshot {
            cpu_percent: 47.3,
            memory: MemoryUsage {
                total_gb: 8.0,
                used_gb: 5.12,
                percent: 62.0,
            },
            disk: DiskUsage {
                total_gb: 125.0,
                used_gb: 100.0,
                percent: 80.0,
            },
            network: NetworkTotals {
                sent_mb: 120.45,
                recv_mb: 980.10,
            },
        })
    }
}

impl MetricSource for MockSource {
    fn read(&mut self) -> Result<MetricsSnapshot, SourceError> {
        Ok(self.snapshot)
    }
}
