//! Rendering pipeline: styles, bar/graph renderers, frame composition,
//! terminal output and the sampling loop driver.
//!
//! The renderers are pure and emit structured [`text::Span`]s with style
//! as data; only [`terminal::AnsiTerminal`] knows about escape sequences.

pub mod app;
pub mod bar;
pub mod frame;
pub mod graph;
pub mod style;
pub mod terminal;
pub mod text;

pub use app::{App, LoopState};
pub use terminal::{AnsiTerminal, FrameSink};
