//! Horizontal colored usage bar.

use super::style::{Category, SpanStyle};
use super::text::{Line, Span};

/// Renders a percentage as a fixed-width colored bar between `|` delimiters.
///
/// The filled cells use the category's background color, the remainder the
/// neutral one. The percentage is clamped to [0, 100] before computing the
/// fill, so out-of-range inputs render as an all-empty or all-filled bar
/// rather than failing.
pub fn render_bar(percent: f64, width: usize, category: Category) -> Line {
    let clamped = percent.clamp(0.0, 100.0);
    let fill_count = ((clamped / 100.0 * width as f64).floor() as usize).min(width);
    let empty_count = width - fill_count;

    let mut line = Line::new();
    line.push(Span::plain("|"));
    line.push(Span::styled(
        " ".repeat(fill_count),
        SpanStyle::Fill(category),
    ));
    line.push(Span::styled(
        " ".repeat(empty_count),
        SpanStyle::Fill(Category::Neutral),
    ));
    line.push(Span::plain("|"));
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_cells(line: &Line) -> usize {
        line.spans
            .iter()
            .filter(|s| matches!(s.style, SpanStyle::Fill(c) if c != Category::Neutral))
            .map(Span::width)
            .sum()
    }

    fn empty_cells(line: &Line) -> usize {
        line.spans
            .iter()
            .filter(|s| s.style == SpanStyle::Fill(Category::Neutral))
            .map(Span::width)
            .sum()
    }

    #[test]
    fn zero_percent_is_all_empty() {
        let bar = render_bar(0.0, 20, Category::Cpu);
        assert_eq!(filled_cells(&bar), 0);
        assert_eq!(empty_cells(&bar), 20);
    }

    #[test]
    fn hundred_percent_is_all_filled() {
        let bar = render_bar(100.0, 20, Category::Mem);
        assert_eq!(filled_cells(&bar), 20);
        assert_eq!(empty_cells(&bar), 0);
    }

    #[test]
    fn half_of_thirty_is_fifteen_cells() {
        let bar = render_bar(50.0, 30, Category::Disk);
        assert_eq!(filled_cells(&bar), 15);
        assert_eq!(empty_cells(&bar), 15);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let under = render_bar(-12.5, 10, Category::Cpu);
        assert_eq!(filled_cells(&under), 0);
        assert_eq!(empty_cells(&under), 10);

        let over = render_bar(250.0, 10, Category::Cpu);
        assert_eq!(filled_cells(&over), 10);
        assert_eq!(empty_cells(&over), 0);
    }

    #[test]
    fn fill_is_monotonic_in_percent() {
        let mut previous = 0;
        for p in 0..=100 {
            let fill = filled_cells(&render_bar(p as f64, 30, Category::Cpu));
            assert!(fill >= previous, "fill shrank at {}%", p);
            previous = fill;
        }
    }

    #[test]
    fn bar_is_bracketed_and_fixed_width() {
        let bar = render_bar(33.0, 30, Category::Cpu);
        let text = bar.text();
        assert!(text.starts_with('|'));
        assert!(text.ends_with('|'));
        assert_eq!(text.chars().count(), 32);
    }
}
