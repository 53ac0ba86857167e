//! Color scheme (task-manager style).

use crossterm::style::Color;

/// Metric category a styled cell belongs to.
///
/// Categories, not raw colors, flow through the renderers; the mapping to
/// terminal colors lives in [`Theme`] so the core stays style-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Cpu,
    Mem,
    Disk,
    Net,
    /// Empty bar cells and other inactive fill.
    Neutral,
}

/// Task-manager style color palette.
pub struct Theme;

impl Theme {
    // Fill (background) colors per category
    pub const CPU: Color = Color::Red;
    pub const MEM: Color = Color::Blue;
    pub const DISK: Color = Color::Green;
    pub const NET: Color = Color::Yellow;
    pub const NEUTRAL: Color = Color::Grey;
}

impl Category {
    /// Terminal color for this category.
    pub const fn color(self) -> Color {
        match self {
            Category::Cpu => Theme::CPU,
            Category::Mem => Theme::MEM,
            Category::Disk => Theme::DISK,
            Category::Net => Theme::NET,
            Category::Neutral => Theme::NEUTRAL,
        }
    }
}

/// Style attached to a span of frame text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    /// Unstyled text.
    Plain,
    /// Bold text (headers, rules).
    Bold,
    /// Faint text (the below-threshold activity marker).
    Dim,
    /// Solid block: spaces drawn on the category's background color.
    Fill(Category),
    /// Text drawn in the category's foreground color.
    Accent(Category),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_color_mapping_matches_the_palette() {
        assert_eq!(Category::Cpu.color(), Color::Red);
        assert_eq!(Category::Mem.color(), Color::Blue);
        assert_eq!(Category::Disk.color(), Color::Green);
        assert_eq!(Category::Net.color(), Color::Yellow);
        assert_eq!(Category::Neutral.color(), Color::Grey);
    }
}
