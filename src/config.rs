//! Dashboard configuration.

use std::time::Duration;

/// Resolved dashboard settings.
///
/// Defaults match the classic layout: 1 second refresh, a 30-sample CPU
/// history, a 5-row history graph and 30-cell bars.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Target tick period. The CPU measurement inside a tick adds its own
    /// blocking interval on top of this.
    pub tick: Duration,
    /// Number of CPU samples kept in the rolling history.
    pub history_len: usize,
    /// Height of the CPU history graph in data rows.
    pub graph_rows: usize,
    /// Width of the horizontal usage bars in cells.
    pub bar_width: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            history_len: 30,
            graph_rows: 5,
            bar_width: 30,
        }
    }
}
