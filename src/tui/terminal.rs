//! Terminal output: the `FrameSink` seam and its crossterm-backed
//! implementation.
//!
//! Everything escape-sequence shaped lives here; the renderers and the
//! frame composer only ever see structured spans.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Print, PrintStyledContent, ResetColor, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};

use super::style::SpanStyle;
use super::text::{Frame, Span};

/// Destination for composed frames.
///
/// Production uses [`AnsiTerminal`]; tests substitute recording sinks to
/// observe the loop without a terminal.
pub trait FrameSink {
    /// Clears the display and draws one frame.
    fn present(&mut self, frame: &Frame) -> io::Result<()>;

    /// Resets the display to a usable state. Called exactly once when the
    /// sampling loop stops, on every exit path.
    fn restore(&mut self) -> io::Result<()>;
}

/// Frame sink that writes ANSI escape sequences through crossterm.
pub struct AnsiTerminal<W: Write> {
    out: W,
}

impl AnsiTerminal<io::Stdout> {
    /// Terminal on standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiTerminal<W> {
    /// Terminal over an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn queue_span(&mut self, span: &Span) -> io::Result<()> {
        let text = span.text.as_str();
        match span.style {
            SpanStyle::Plain => queue!(self.out, Print(text)),
            SpanStyle::Bold => queue!(self.out, PrintStyledContent(text.bold())),
            SpanStyle::Dim => queue!(self.out, PrintStyledContent(text.dim())),
            SpanStyle::Fill(category) => {
                queue!(self.out, PrintStyledContent(text.on(category.color())))
            }
            SpanStyle::Accent(category) => {
                queue!(self.out, PrintStyledContent(text.with(category.color())))
            }
        }
    }
}

impl<W: Write> FrameSink for AnsiTerminal<W> {
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0), Hide)?;
        for line in &frame.lines {
            for span in &line.spans {
                self.queue_span(span)?;
            }
            queue!(self.out, Print("\n"))?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    fn restore(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            ResetColor,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Show
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::style::Category;
    use crate::tui::text::Line;

    fn sample_frame() -> Frame {
        let mut bar = Line::new();
        bar.push(Span::plain("|"));
        bar.push(Span::styled("   ", SpanStyle::Fill(Category::Cpu)));
        bar.push(Span::plain("|"));
        Frame {
            lines: vec![Line::from_span(Span::bold("CPU Usage:")), bar],
        }
    }

    #[test]
    fn present_writes_text_and_escape_sequences() {
        let mut sink = AnsiTerminal::new(Vec::new());
        sink.present(&sample_frame()).unwrap();

        let output = String::from_utf8_lossy(&sink.out).to_string();
        assert!(output.contains("CPU Usage:"));
        assert!(output.contains('|'));
        // clear-screen and color codes are present
        assert!(output.contains("\x1b["));
    }

    #[test]
    fn restore_resets_styling() {
        let mut sink = AnsiTerminal::new(Vec::new());
        sink.restore().unwrap();
        let output = String::from_utf8_lossy(&sink.out).to_string();
        // SGR reset
        assert!(output.contains("\x1b[0m"));
    }
}
