//! Vertical CPU history graph with threshold banding.

use super::style::{Category, SpanStyle};
use super::text::{Line, Span};

/// Renders the history window as a `rows`-high vertical bar chart plus a
/// baseline, top row first.
///
/// Row `h` (counting from 1 at the bottom) covers the band at and above
/// `100 * h / rows` percent: a sample equal to the threshold counts into
/// the higher band. The bottom row additionally shows a dim `·` for
/// samples that are nonzero but below the lowest threshold. Works for any
/// positive `rows` and any history length.
pub fn render_graph(history: &[f64], rows: usize) -> Vec<Line> {
    debug_assert!(rows > 0, "graph height must be positive");
    let mut lines = Vec::with_capacity(rows + 1);

    for h in (1..=rows).rev() {
        let threshold = 100.0 * h as f64 / rows as f64;
        let mut line = Line::new();
        line.push(Span::plain(format!("{:>3}% | ", threshold.round() as u32)));

        for &value in history {
            if value >= threshold {
                line.push_cell(' ', SpanStyle::Fill(Category::Cpu));
            } else if value > 0.0 && h == 1 {
                // Some load, but below the lowest band: show a faint dot
                line.push_cell('·', SpanStyle::Dim);
            } else {
                line.push_cell(' ', SpanStyle::Plain);
            }
        }
        lines.push(line);
    }

    // Baseline under the sample columns
    lines.push(Line::from_span(Span::plain(format!(
        "----+{}",
        "-".repeat(history.len())
    ))));
    lines
}
