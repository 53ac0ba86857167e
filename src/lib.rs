//! resmon - Task-manager style terminal resource monitor library.
//!
//! This library provides the sampling/history/rendering pipeline behind
//! the `resmon` binary:
//! - `collector` - metric sampling from the host (with zero-value fallback)
//! - `history` - rolling buffer of recent CPU readings
//! - `tui` - bar/graph renderers, frame composition and terminal output

pub mod collector;
pub mod config;
pub mod history;
pub mod model;
pub mod tui;
