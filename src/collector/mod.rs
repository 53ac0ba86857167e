//! Metric sampling from the host system.
//!
//! The `MetricSource` trait is the seam between the dashboard and the
//! platform metrics API: production uses `SysinfoSource`, tests use
//! `MockSource` or purpose-built failing sources. `Sampler` wraps a source
//! and guarantees that a failed reading degrades to an all-zero snapshot
//! instead of crashing the render loop.

mod mock;
mod sysinfo_source;

pub use mock::MockSource;
pub use sysinfo_source::SysinfoSource;

use tracing::warn;

use crate::model::MetricsSnapshot;

/// Error types that can occur while reading host metrics.
#[derive(Debug, Clone)]
pub enum SourceError {
    /// CPU utilization could not be measured.
    Cpu(String),
    /// Virtual memory counters could not be read.
    Memory(String),
    /// Root filesystem usage could not be read.
    Disk(String),
    /// Network I/O counters could not be read.
    Network(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Cpu(msg) => write!(f, "CPU error: {}", msg),
            SourceError::Memory(msg) => write!(f, "Memory error: {}", msg),
            SourceError::Disk(msg) => write!(f, "Disk error: {}", msg),
            SourceError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

/// Abstraction over the platform metrics API.
///
/// One call produces one complete reading. CPU utilization is measured
/// over a short interval, so `read` is expected to block for roughly
/// 100ms; this bounds the minimum tick period of the sampling loop.
pub trait MetricSource {
    /// Reads one snapshot of all monitored metrics.
    fn read(&mut self) -> Result<MetricsSnapshot, SourceError>;
}

/// Samples metrics from a source, degrading failures to zero values.
///
/// A transient failure shows up as one tick of 0% / 0 GB readings; it is
/// logged but never surfaced to the caller, so rendering always has a
/// well-formed snapshot to work with.
pub struct Sampler<S: MetricSource> {
    source: S,
}

impl<S: MetricSource> Sampler<S> {
    /// Creates a sampler over the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Takes one reading. Never fails.
    pub fn sample(&mut self) -> MetricsSnapshot {
        match self.source.read() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("metrics unavailable, substituting zeros: {}", e);
                MetricsSnapshot::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl MetricSource for FailingSource {
        fn read(&mut self) -> Result<MetricsSnapshot, SourceError> {
            Err(SourceError::Cpu("counter not supported".to_string()))
        }
    }

    #[test]
    fn sampler_passes_through_successful_readings() {
        let mut sampler = Sampler::new(MockSource::typical_system());
        let snapshot = sampler.sample();
        assert_eq!(snapshot.cpu_percent, 47.3);
        assert_eq!(snapshot.memory.total_gb, 8.0);
    }

    #[test]
    fn sampler_substitutes_zeros_on_failure() {
        let mut sampler = Sampler::new(FailingSource);
        let snapshot = sampler.sample();
        assert_eq!(snapshot, MetricsSnapshot::default());
    }

    #[test]
    fn source_errors_format_with_their_subsystem() {
        let err = SourceError::Disk("no root filesystem".to_string());
        assert_eq!(err.to_string(), "Disk error: no root filesystem");
        let err = SourceError::Network("counters missing".to_string());
        assert!(err.to_string().starts_with("Network error:"));
        let err = SourceError::Memory("denied".to_string());
        assert!(err.to_string().starts_with("Memory error:"));
    }
}
