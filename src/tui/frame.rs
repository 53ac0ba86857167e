//! Frame composition: one metrics snapshot -> one full screen of output.

use chrono::{DateTime, Local};

use crate::config::DashboardConfig;
use crate::history::HistoryBuffer;
use crate::model::MetricsSnapshot;

use super::bar::render_bar;
use super::graph::render_graph;
use super::style::{Category, SpanStyle};
use super::text::{Frame, Line, Span};

/// Width of the rules and centered header text.
const RULE_WIDTH: usize = 52;

/// Composes the full dashboard frame for one tick.
///
/// Pure: no I/O, always succeeds, and identical inputs (including the
/// timestamp, which the caller supplies) produce identical frames.
pub fn compose(
    snapshot: &MetricsSnapshot,
    history: &HistoryBuffer,
    iteration: u64,
    timestamp: DateTime<Local>,
    config: &DashboardConfig,
) -> Frame {
    let mut lines = Vec::new();
    let rule = || Line::from_span(Span::bold("=".repeat(RULE_WIDTH)));
    let separator = || Line::from_span(Span::plain("-".repeat(RULE_WIDTH)));

    // Header
    lines.push(rule());
    lines.push(Line::from_span(Span::bold(format!(
        "{:^width$}",
        "Task Manager Style Resource Monitor",
        width = RULE_WIDTH
    ))));
    lines.push(Line::from_span(Span::plain(format!(
        "{:^width$}",
        format!(
            "(Refresh: {}s | History: {}s)",
            config.tick.as_secs(),
            history.capacity()
        ),
        width = RULE_WIDTH
    ))));
    lines.push(rule());
    lines.push(Line::from_span(Span::plain(format!(
        "Last Update: {} (Iteration {})",
        timestamp.format("%Y-%m-%d %H:%M:%S"),
        iteration
    ))));
    lines.push(separator());

    // CPU
    lines.push(Line::from_span(Span::bold("CPU Usage:")));
    lines.push(load_line(snapshot.cpu_percent, Category::Cpu, config));
    lines.push(Line::new());
    lines.extend(render_graph(&history.snapshot(), config.graph_rows));
    lines.push(separator());

    // Memory
    lines.push(Line::from_span(Span::bold("Memory (RAM) Usage:")));
    lines.push(load_line(snapshot.memory.percent, Category::Mem, config));
    lines.push(Line::from_span(Span::plain(format!(
        "  Used: {:.2} GB / {:.2} GB",
        snapshot.memory.used_gb, snapshot.memory.total_gb
    ))));
    lines.push(separator());

    // Disk (root filesystem)
    lines.push(Line::from_span(Span::bold("Disk Usage (Root):")));
    lines.push(load_line(snapshot.disk.percent, Category::Disk, config));
    lines.push(Line::from_span(Span::plain(format!(
        "  Used: {:.2} GB / {:.2} GB",
        snapshot.disk.used_gb, snapshot.disk.total_gb
    ))));
    lines.push(separator());

    // Network: cumulative counters, not percentages, so no bar
    lines.push(Line::from_span(Span::bold("Network I/O (Total):")));
    lines.push(network_line("  Data Sent:     ", snapshot.network.sent_mb));
    lines.push(network_line("  Data Received: ", snapshot.network.recv_mb));
    lines.push(separator());

    lines.push(Line::from_span(Span::plain(
        "Note: Colors require ANSI support. Press Ctrl+C to stop.",
    )));

    Frame { lines }
}

fn load_line(percent: f64, category: Category, config: &DashboardConfig) -> Line {
    let mut line = Line::new();
    line.push(Span::plain(format!("  Load: {:>5.1}%  ", percent)));
    line.spans
        .extend(render_bar(percent, config.bar_width, category).spans);
    line
}

fn network_line(label: &str, mb: f64) -> Line {
    let mut line = Line::new();
    line.push(Span::plain(label));
    line.push(Span::styled(
        format!("{:>7.2} MB", mb),
        SpanStyle::Accent(Category::Net),
    ));
    line
}
