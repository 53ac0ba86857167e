//! Structured frame text: spans, lines and whole frames.
//!
//! Renderers build these instead of escape-sequence strings, so output is
//! comparable in tests without a terminal.

use super::style::SpanStyle;

/// A run of uniformly styled text.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    /// A styled span.
    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// An unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, SpanStyle::Plain)
    }

    /// A bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::styled(text, SpanStyle::Bold)
    }

    /// Number of cells this span occupies.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// One row of frame output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    /// A line consisting of a single span.
    pub fn from_span(span: Span) -> Self {
        Self { spans: vec![span] }
    }

    /// Appends a span, dropping empty ones.
    pub fn push(&mut self, span: Span) {
        if !span.text.is_empty() {
            self.spans.push(span);
        }
    }

    /// Appends one cell, merging it into the previous span when the style
    /// matches so runs of identical cells stay one span.
    pub fn push_cell(&mut self, ch: char, style: SpanStyle) {
        if let Some(last) = self.spans.last_mut()
            && last.style == style
        {
            last.text.push(ch);
            return;
        }
        self.spans.push(Span::styled(ch.to_string(), style));
    }

    /// Concatenated text with styles stripped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// The fully composed output of one tick.
///
/// Produced by the frame composer and handed straight to a
/// [`super::FrameSink`]; never retained across ticks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub lines: Vec<Line>,
}

impl Frame {
    /// Full frame text with styles stripped, one string per line joined
    /// with newlines. Test and debugging helper.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::style::Category;

    #[test]
    fn push_cell_merges_runs_of_the_same_style() {
        let mut line = Line::new();
        line.push_cell(' ', SpanStyle::Fill(Category::Cpu));
        line.push_cell(' ', SpanStyle::Fill(Category::Cpu));
        line.push_cell('x', SpanStyle::Plain);
        line.push_cell('y', SpanStyle::Plain);

        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].text, "  ");
        assert_eq!(line.spans[1].text, "xy");
    }

    #[test]
    fn push_drops_empty_spans() {
        let mut line = Line::new();
        line.push(Span::plain(""));
        line.push(Span::plain("a"));
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.text(), "a");
    }

    #[test]
    fn frame_text_joins_lines() {
        let frame = Frame {
            lines: vec![
                Line::from_span(Span::bold("top")),
                Line::from_span(Span::plain("bottom")),
            ],
        };
        assert_eq!(frame.text(), "top\nbottom");
    }
}
